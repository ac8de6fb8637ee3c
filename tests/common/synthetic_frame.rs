/// Flat frame with square patches of `value`, `2 * half + 1` pixels wide,
/// centred at each of `centers`.
pub fn patch_frame(
    width: usize,
    height: usize,
    background: u16,
    centers: &[(usize, usize)],
    half: usize,
    value: u16,
) -> Vec<u16> {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    let mut img = vec![background; width * height];
    for &(cx, cy) in centers {
        for y in cy.saturating_sub(half)..=(cy + half).min(height - 1) {
            for x in cx.saturating_sub(half)..=(cx + half).min(width - 1) {
                img[y * width + x] = value;
            }
        }
    }
    img
}

/// Eye-like scene: bright `sclera` background, a dark iris disc of
/// `iris_radius` around every glint, and a saturated 3×3 glint at its centre.
pub fn eye_scene(
    width: usize,
    height: usize,
    sclera: u16,
    iris: u16,
    iris_radius: usize,
    glints: &[(usize, usize)],
) -> Vec<u16> {
    let mut img = vec![sclera; width * height];
    let r = iris_radius as i64;
    for &(gx, gy) in glints {
        for y in 0..height {
            for x in 0..width {
                let (dx, dy) = (x as i64 - gx as i64, y as i64 - gy as i64);
                if dx * dx + dy * dy <= r * r {
                    img[y * width + x] = iris;
                }
            }
        }
    }
    for &(gx, gy) in glints {
        for y in gy - 1..=gy + 1 {
            for x in gx - 1..=gx + 1 {
                img[y * width + x] = 1023;
            }
        }
    }
    img
}
