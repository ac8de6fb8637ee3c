use glint_tracker::config::load_config;
use glint_tracker::image::io::{load_frame_u16, save_plane_u8, save_rgb, write_json_file};
use glint_tracker::{compose_debug_image, EyeTracker, FrameReport};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let mut config = load_config(Path::new(&config_path))?;
    let first = config
        .inputs
        .frames
        .first()
        .ok_or("Config lists no input frames")?;

    let first_frame = load_frame_u16(first, config.inputs.right_shift)?;
    config.tracker.width = first_frame.w;
    config.tracker.height = first_frame.h;
    let mut tracker = EyeTracker::new(&config.tracker).map_err(|e| e.to_string())?;

    let out_dir = &config.output.dir;
    let mut summaries = Vec::with_capacity(config.inputs.frames.len());
    for (index, path) in config.inputs.frames.iter().enumerate() {
        let frame = load_frame_u16(path, config.inputs.right_shift)?;
        let out = tracker
            .process_frame(frame.as_view())
            .map_err(|e| format!("{}: {e}", path.display()))?;

        let stem = format!("frame_{index:04}");
        write_json_file(&out_dir.join(format!("{stem}.json")), &out.report)?;
        if config.output.debug_images {
            save_rgb(
                &compose_debug_image(&out),
                &out_dir.join(format!("{stem}_debug.png")),
            )?;
        }
        if config.output.eye_images {
            for eye in &out.eyes {
                let name = format!("{stem}_{}.png", eye.label());
                save_plane_u8(&eye.image, &out_dir.join(name))?;
            }
        }

        println!(
            "{}: {} glint(s), {} eye(s), {:.3} ms",
            path.display(),
            out.report.glints.len(),
            out.eyes.len(),
            out.report.timing.total_ms
        );
        summaries.push(FrameSummary::new(path, &out.report));
    }

    let summary_path = out_dir.join("summary.json");
    write_json_file(&summary_path, &summaries)?;
    println!(
        "Saved {} frame report(s) to {}",
        summaries.len(),
        summary_path.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: glint_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameSummary {
    input: String,
    glints: Vec<[f32; 2]>,
    eyes: Vec<String>,
    total_ms: f64,
}

impl FrameSummary {
    fn new(path: &Path, report: &FrameReport) -> Self {
        Self {
            input: path.display().to_string(),
            glints: report
                .glints
                .iter()
                .map(|g| {
                    let p = g.full_res_position();
                    [p.x, p.y]
                })
                .collect(),
            eyes: report.eyes.iter().map(|e| e.label.clone()).collect(),
            total_ms: report.timing.total_ms,
        }
    }
}
