//! PNG rasterization of layered polyline drawings

use crate::io::configuration::{BACKGROUND_COLOR, LAYER_PALETTE};
use crate::io::error::{Result, SolverError};
use crate::render::drawing::{Drawing, Point};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Rasterize per-layer drawings to a PNG preview of the plot
///
/// The board spans `cols` × `rows` tiles of `tile_size` board units; each
/// tile is rendered `pixels_per_tile` pixels wide and tall. Layers are
/// stroked in order with colors cycled from the palette, so later layers
/// draw over earlier ones the way later pens overprint on paper.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to `output_path`.
pub fn export_layers_as_png(
    layers: &[Drawing],
    rows: usize,
    cols: usize,
    tile_size: [f64; 2],
    pixels_per_tile: u32,
    output_path: &Path,
) -> Result<()> {
    let [tile_w, tile_h] = tile_size;
    let scale_x = if tile_w > 0.0 {
        f64::from(pixels_per_tile) / tile_w
    } else {
        f64::from(pixels_per_tile)
    };
    let scale_y = if tile_h > 0.0 {
        f64::from(pixels_per_tile) / tile_h
    } else {
        f64::from(pixels_per_tile)
    };

    let width = (cols as u32).saturating_mul(pixels_per_tile).max(1);
    let height = (rows as u32).saturating_mul(pixels_per_tile).max(1);
    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    for (index, layer) in layers.iter().enumerate() {
        let rgba = LAYER_PALETTE
            .get(index % LAYER_PALETTE.len())
            .copied()
            .unwrap_or([0, 0, 0, 255]);
        let color = Rgba(rgba);
        for path in layer.paths() {
            for segment in path.windows(2) {
                if let [from, to] = segment {
                    draw_segment(&mut img, *from, *to, scale_x, scale_y, color);
                }
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| SolverError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

// Dense sampling along the segment; at two samples per pixel of length the
// stroke stays gap-free at any angle
fn draw_segment(
    img: &mut RgbaImage,
    from: Point,
    to: Point,
    scale_x: f64,
    scale_y: f64,
    color: Rgba<u8>,
) {
    let x0 = from[0] * scale_x;
    let y0 = from[1] * scale_y;
    let x1 = to[0] * scale_x;
    let y1 = to[1] * scale_y;

    let length = (x1 - x0).hypot(y1 - y0);
    let steps = (length * 2.0).ceil().max(1.0) as usize;

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = x0 + (x1 - x0) * t;
        let y = y0 + (y1 - y0) * t;
        plot(img, x.round() as i64, y.round() as i64, color);
    }
}

fn plot(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(pixel) = img.get_pixel_mut_checked(x as u32, y as u32) {
        *pixel = color;
    }
}
