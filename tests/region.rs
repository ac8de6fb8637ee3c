use glint_tracker::detector::params::RegionParams;
use glint_tracker::region::RegionProjector;
use nalgebra::Point2;

const W: usize = 1536;
const H: usize = 1024;

#[test]
fn projector_clips_at_origin() {
    let projector = RegionProjector::new(&RegionParams::default());
    let region = projector.project(Point2::new(0.0, 0.0), W, H);
    assert_eq!((region.full.x, region.full.y), (0, 0));
    assert_eq!((region.small.x, region.small.y), (0, 0));
    assert!(region.full.width <= 200 && region.full.height <= 160);
    assert!(!region.is_degenerate());
}

#[test]
fn projected_rects_always_lie_inside_their_images() {
    let projector = RegionProjector::new(&RegionParams::default());
    for gy in (0..=520).step_by(37) {
        for gx in (0..=780).step_by(41) {
            let region = projector.project(Point2::new(gx as f32 + 0.3, gy as f32 + 0.6), W, H);
            assert!(region.full.x_end() <= W && region.full.y_end() <= H);
            assert!(region.small.x_end() <= W / 2 && region.small.y_end() <= H / 2);
            assert!(region.full.width <= 200 && region.full.height <= 160);
            assert!(region.small.width <= 100 && region.small.height <= 80);
        }
    }
}

#[test]
fn interior_projection_round_trips_within_one_pixel() {
    let projector = RegionProjector::new(&RegionParams::default());
    for &(x, y) in &[(100.0f32, 80.0f32), (384.2, 256.7), (667.5, 431.49)] {
        let region = projector.project(Point2::new(x, y), W, H);
        assert_eq!((region.full.width, region.full.height), (200, 160));
        let [cx, cy] = region.full.center();
        assert!((cx / 2.0 - x).abs() <= 1.0, "x={x} centre={cx}");
        assert!((cy / 2.0 - y).abs() <= 1.0, "y={y} centre={cy}");
    }
}

#[test]
fn custom_box_size_is_respected() {
    let projector = RegionProjector::new(&RegionParams {
        box_width: 64,
        box_height: 48,
    });
    let region = projector.project(Point2::new(200.0, 200.0), W, H);
    assert_eq!((region.full.x, region.full.y), (368, 376));
    assert_eq!((region.full.width, region.full.height), (64, 48));
    assert_eq!((region.small.width, region.small.height), (32, 24));
}
