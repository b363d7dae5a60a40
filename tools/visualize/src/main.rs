//! Diagnostic visualizer — plots the noise curve and its octave layers to
//! data/debug/noise_curve.png.
//! Not part of the library; no tests, no clippy target.

use std::fs;
use std::path::Path;

use evonoise_core::sampling::{range_position, sample_range};
use evonoise_core::{NoiseParams, PerlinNoise1D};

const W: usize = 1024;
const H: usize = 360;

/// Plotted range of positions.
const X_START: f64 = -4.0;
const X_END: f64 = 28.0;

/// Vertical half-extent mapped to the image height.
const Y_EXTENT: f64 = 1.6;

// ── Colour helpers ────────────────────────────────────────────────────────────

/// Octave index → distinct RGB colour.
fn octave_color(i: usize) -> [u8; 3] {
    const PALETTE: [[u8; 3]; 6] = [
        [220,  50,  50], // red
        [255, 140,   0], // orange
        [ 70, 130, 180], // steel blue
        [150,  50, 200], // purple
        [ 60, 170,  90], // green
        [120, 120, 120], // gray
    ];
    PALETTE[i % PALETTE.len()]
}

/// Noise value → pixel row, clamped to the image.
fn value_to_row(v: f64) -> i64 {
    let t = (Y_EXTENT - v) / (2.0 * Y_EXTENT);
    ((t * (H - 1) as f64).round() as i64).clamp(0, H as i64 - 1)
}

/// Draw `values` (one per column) as a connected polyline.
fn draw_curve(img: &mut image::RgbImage, values: &[f64], color: [u8; 3]) {
    let mut prev: Option<i64> = None;
    for (c, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            prev = None;
            continue;
        }
        let row = value_to_row(v);
        let (lo, hi) = match prev {
            Some(p) => (p.min(row), p.max(row)),
            None => (row, row),
        };
        for r in lo..=hi {
            img.put_pixel(c as u32, r as u32, image::Rgb(color));
        }
        prev = Some(row);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let params = NoiseParams { octaves: 4, ..NoiseParams::default() };
    let noise = PerlinNoise1D::default();
    let step = (X_END - X_START) / (W - 1) as f64;

    let out_dir = Path::new("data/debug");
    fs::create_dir_all(out_dir).expect("cannot create data/debug/");

    let mut img = image::RgbImage::from_pixel(W as u32, H as u32, image::Rgb([255, 255, 255]));

    // Axis at zero and a tick at every lattice position.
    let zero = value_to_row(0.0) as u32;
    for c in 0..W {
        img.put_pixel(c as u32, zero, image::Rgb([200, 200, 200]));
        let x = range_position(X_START, step, c);
        if (x - x.round()).abs() < step / 2.0 {
            for r in zero.saturating_sub(3)..=(zero + 3).min(H as u32 - 1) {
                img.put_pixel(c as u32, r, image::Rgb([160, 160, 160]));
            }
        }
    }

    println!("Plotting {} octaves over [{X_START}, {X_END}]…", params.octaves);
    for i in 0..params.octaves {
        let layer: Vec<f64> = (0..W)
            .map(|c| noise.octave(range_position(X_START, step, c), params.persistence, i))
            .collect();
        draw_curve(&mut img, &layer, octave_color(i as usize));
    }

    let total = sample_range(&noise, &params, X_START, step, W);
    draw_curve(&mut img, &total, [0, 0, 0]);

    let path = out_dir.join("noise_curve.png");
    img.save(&path).expect("failed to save noise_curve.png");
    println!("Wrote {}", path.display());
}
