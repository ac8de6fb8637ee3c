use glint_tracker::image::ImageU16;
use glint_tracker::{EyeTracker, TrackerConfig};

/// Sclera-bright frame with two dark irises, each carrying a 3×3 glint.
fn synthetic_frame(w: usize, h: usize, glints: &[(usize, usize)]) -> Vec<u16> {
    let mut data = vec![600u16; w * h];
    for &(gx, gy) in glints {
        let r = 60i64;
        for y in gy.saturating_sub(60)..(gy + 60).min(h) {
            for x in gx.saturating_sub(60)..(gx + 60).min(w) {
                let (dx, dy) = (x as i64 - gx as i64, y as i64 - gy as i64);
                if dx * dx + dy * dy <= r * r {
                    data[y * w + x] = 120;
                }
            }
        }
        for y in gy - 1..=gy + 1 {
            for x in gx - 1..=gx + 1 {
                data[y * w + x] = 1023;
            }
        }
    }
    data
}

fn main() {
    env_logger::init();

    // Demo stub: synthesises a reference-size frame and runs one pass
    let config = TrackerConfig::default();
    let (w, h) = (config.width, config.height);
    let pixels = synthetic_frame(w, h, &[(600, 500), (900, 500)]);

    let result = ImageU16::from_slice(w, h, &pixels)
        .and_then(|frame| EyeTracker::new(&config)?.process_frame(frame));
    match result {
        Ok(out) => {
            for g in &out.report.glints {
                let p = g.full_res_position();
                println!("glint at ({:.1}, {:.1}) score={:.1}", p.x, p.y, g.score);
            }
            println!(
                "glints={} eyes={} latency_ms={:.3}",
                out.report.glints.len(),
                out.eyes.len(),
                out.report.timing.total_ms
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
