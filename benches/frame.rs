use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glint_tracker::downsample::downsample2x2_mean_u16;
use glint_tracker::image::ImageU16;
use glint_tracker::kernel::{ContrastKernel, KernelParams};
use glint_tracker::{EyeTracker, TrackerConfig};

const WIDTH: usize = 1536;
const HEIGHT: usize = 1024;

fn reference_frame() -> Vec<u16> {
    let mut data = Vec::with_capacity(WIDTH * HEIGHT);
    for i in 0..(WIDTH * HEIGHT) {
        data.push(200 + (i % 397) as u16);
    }
    for &(gx, gy) in &[(600usize, 500usize), (900, 500)] {
        for y in gy - 1..=gy + 1 {
            for x in gx - 1..=gx + 1 {
                data[y * WIDTH + x] = 1023;
            }
        }
    }
    data
}

fn bench_contrast_kernel(c: &mut Criterion) {
    let data = reference_frame();
    let frame = ImageU16::from_slice(WIDTH, HEIGHT, &data).expect("valid frame");
    let half = downsample2x2_mean_u16(&frame);
    let view = half.as_view();
    let kernel = ContrastKernel::new(KernelParams::default()).expect("kernel");

    c.bench_function("contrast_kernel_768x512", |b| {
        b.iter(|| {
            let out = kernel.apply(black_box(&view)).expect("contrast");
            black_box(out);
        });
    });
}

fn bench_process_frame(c: &mut Criterion) {
    let data = reference_frame();
    let frame = ImageU16::from_slice(WIDTH, HEIGHT, &data).expect("valid frame");
    let mut tracker = EyeTracker::new(&TrackerConfig::default()).expect("tracker");

    c.bench_function("process_frame_1536x1024", |b| {
        b.iter(|| {
            let out = tracker.process_frame(black_box(frame)).expect("frame");
            black_box(out.report.glints.len());
        });
    });
}

criterion_group!(benches, bench_contrast_kernel, bench_process_frame);
criterion_main!(benches);
