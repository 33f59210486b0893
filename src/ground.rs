/// Ground-line estimation for hand-drawn backdrops.
///
/// The walkable surface is taken to be the darkest pixel in a vertical band
/// through the middle of the image.  Pure and deterministic.

use image::RgbaImage;

/// Perceptual (Rec. 709) luminance.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32
}

/// Scan rows `[40%, 90%)` of the centre column and return the row just below
/// the darkest sample, clamped to the image.
pub fn detect_ground_y(image: &RgbaImage) -> i32 {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return 0;
    }

    let y_start = (h as f64 * 0.40) as u32;
    let y_end = (h as f64 * 0.90) as u32;
    let x = w / 2;

    let mut best_y = (h as f64 * 0.75) as u32;
    let mut best_lum = f32::INFINITY;
    for y in y_start..y_end {
        let [r, g, b, _] = image.get_pixel(x, y).0;
        let lum = luminance(r, g, b);
        // Strict comparison: the topmost of equally dark rows wins.
        if lum < best_lum {
            best_lum = lum;
            best_y = y;
        }
    }

    (h - 1).min(best_y + 1) as i32
}
