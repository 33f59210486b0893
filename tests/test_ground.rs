use image::{Rgba, RgbaImage};

use side_scroller::ground::{detect_ground_y, luminance};

const W: u32 = 20;
const H: u32 = 100;

fn white() -> RgbaImage {
    RgbaImage::from_pixel(W, H, Rgba([255, 255, 255, 255]))
}

fn paint_row(img: &mut RgbaImage, y: u32, rgb: [u8; 3]) {
    let [r, g, b] = rgb;
    for x in 0..img.width() {
        img.put_pixel(x, y, Rgba([r, g, b, 255]));
    }
}

#[test]
fn luminance_weights() {
    assert_eq!(luminance(0, 0, 0), 0.0);
    assert!((luminance(255, 255, 255) - 255.0).abs() < 1e-3);
    // Green dominates perceived brightness.
    assert!(luminance(0, 100, 0) > luminance(100, 0, 0));
    assert!(luminance(100, 0, 0) > luminance(0, 0, 100));
}

#[test]
fn darkest_row_plus_one() {
    let mut img = white();
    paint_row(&mut img, 70, [10, 10, 10]);
    assert_eq!(detect_ground_y(&img), 71);
}

#[test]
fn only_centre_column_is_sampled() {
    let mut img = white();
    // Dark pixel off-centre is ignored.
    img.put_pixel(0, 55, Rgba([0, 0, 0, 255]));
    img.put_pixel(W / 2, 80, Rgba([50, 50, 50, 255]));
    assert_eq!(detect_ground_y(&img), 81);
}

#[test]
fn rows_outside_band_ignored() {
    let mut img = white();
    paint_row(&mut img, 10, [0, 0, 0]); // above 40 %
    paint_row(&mut img, 95, [0, 0, 0]); // below 90 %
    paint_row(&mut img, 60, [120, 120, 120]);
    assert_eq!(detect_ground_y(&img), 61);
}

#[test]
fn band_edges() {
    let mut img = white();
    paint_row(&mut img, 40, [0, 0, 0]);
    assert_eq!(detect_ground_y(&img), 41);

    let mut img = white();
    paint_row(&mut img, 89, [0, 0, 0]);
    assert_eq!(detect_ground_y(&img), 90);

    let mut img = white();
    paint_row(&mut img, 90, [0, 0, 0]); // first row past the band
    assert_eq!(detect_ground_y(&img), 41); // uniform band → topmost row
}

#[test]
fn ties_keep_topmost_row() {
    let mut img = white();
    paint_row(&mut img, 50, [20, 20, 20]);
    paint_row(&mut img, 75, [20, 20, 20]);
    assert_eq!(detect_ground_y(&img), 51);
}

#[test]
fn detection_is_deterministic() {
    let mut img = white();
    for y in 0..H {
        let v = ((y * 37) % 251) as u8;
        paint_row(&mut img, y, [v, v / 2, 255 - v]);
    }
    let first = detect_ground_y(&img);
    for _ in 0..5 {
        assert_eq!(detect_ground_y(&img), first);
    }
    assert!((40..=90).contains(&first));
}

#[test]
fn result_clamped_to_image() {
    let tiny = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
    assert_eq!(detect_ground_y(&tiny), 0);

    let short = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 0, 255]));
    assert!(detect_ground_y(&short) <= 1);
}
