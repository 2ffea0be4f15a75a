// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a grid of iteration counts out as a binary PPM.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::io;
use std::iter;
use std::path::Path;

use grid::Grid;

/// File name of the serial render.
pub const SERIAL_IMAGE: &str = "mandelbrot-serial.ppm";
/// File name of the threaded render.
pub const THREAD_IMAGE: &str = "mandelbrot-thread.ppm";

/// Maps an iteration count to a gray level.  The square root lifts
/// the dim outer bands so the boundary detail is visible.
pub fn shade(count: u32, limit: u32) -> u8 {
    let mapped = (count.min(limit) as f32 / 256.0).sqrt();
    (255.0 * mapped).min(255.0) as u8
}

/// Expands the grid into packed RGB bytes, one gray pixel per cell.
pub fn pixelate(grid: &Grid, limit: u32) -> Vec<u8> {
    grid.as_slice()
        .iter()
        .flat_map(|&count| iter::repeat(shade(count, limit)).take(3))
        .collect()
}

/// Writes `grid` to `filename` as a P6 pixmap.
pub fn write_image<P: AsRef<Path>>(filename: P, grid: &Grid, limit: u32) -> Result<(), io::Error> {
    let pixels = pixelate(grid, limit);
    let output = File::create(filename.as_ref())?;
    let mut encoder = PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(
        &pixels[..],
        grid.width() as u32,
        grid.height() as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn shade_spans_black_to_white() {
        assert_eq!(shade(0, 256), 0);
        assert_eq!(shade(64, 256), 127);
        assert_eq!(shade(256, 256), 255);
        assert_eq!(shade(5000, 256), 255);
    }

    #[test]
    fn pixelate_is_three_bytes_per_cell() {
        let grid = Grid::new(5, 4);
        assert_eq!(pixelate(&grid, 256).len(), 60);
    }

    #[test]
    fn write_image_produces_a_pixmap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        write_image(&path, &Grid::new(5, 4), 256).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6"));
        assert!(bytes.len() > 60);
        assert!(bytes.ends_with(&[0u8; 60][..]));
    }
}
