// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport, a rectangle on the complex plane, and the
//! PlaneMapper, which relates a pixel grid with its origin at 0,0 to
//! that rectangle.  Row 0 of the grid sits on the lower edge of the
//! viewport.
use error::ConfigError;
use num::Complex;

/// The four bounds of a rectangle on the complex plane, treating the
/// real part as the x-component and the imaginary part as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x_min: f64,
    /// Lower edge.
    pub y_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Upper edge.
    pub y_max: f64,
}

impl Viewport {
    /// Builds a viewport, refusing bounds that are the wrong way
    /// around.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Viewport, ConfigError> {
        if x_max < x_min {
            return Err(ConfigError::BadViewport(
                "The left edge is not to the left of the right edge.".to_string(),
            ));
        }
        if y_max < y_min {
            return Err(ConfigError::BadViewport(
                "The lower edge is not below the upper edge.".to_string(),
            ));
        }
        Ok(Viewport {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// The whole of the set: (-2, -1) to (1, 1).
    pub fn full() -> Viewport {
        Viewport {
            x_min: -2.0,
            y_min: -1.0,
            x_max: 1.0,
            y_max: 1.0,
        }
    }

    /// Scales every bound about the origin, then translates the result.
    pub fn scale_and_shift(&self, scale: f64, shift_x: f64, shift_y: f64) -> Viewport {
        Viewport {
            x_min: self.x_min * scale + shift_x,
            y_min: self.y_min * scale + shift_y,
            x_max: self.x_max * scale + shift_x,
            y_max: self.y_max * scale + shift_y,
        }
    }

    /// Width of the rectangle along the real axis.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the rectangle along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// The preset views selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// The default full view.
    Full,
    /// A close-up of the boundary near -0.986 + 0.30i.
    Zoomed,
}

const ZOOM_SCALE: f64 = 0.015;
const ZOOM_SHIFT: (f64, f64) = (-0.986, 0.30);

impl View {
    /// Maps a view index to a preset.  2 is the zoomed view; 1 and
    /// anything below it are the full view; anything else is an error.
    pub fn from_index(index: i64) -> Result<View, ConfigError> {
        match index {
            2 => Ok(View::Zoomed),
            i if i > 1 => Err(ConfigError::InvalidView(i)),
            _ => Ok(View::Full),
        }
    }

    /// The rectangle of the complex plane this preset covers.
    pub fn viewport(&self) -> Viewport {
        match *self {
            View::Full => Viewport::full(),
            View::Zoomed => Viewport::full().scale_and_shift(ZOOM_SCALE, ZOOM_SHIFT.0, ZOOM_SHIFT.1),
        }
    }
}

/// Describes the column, row of a point in the pixel grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of a width x height grid onto a viewport.  Both
/// renderers go through the same mapping, so the complex coordinate
/// of a given pixel is bit-identical whichever thread computes it.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
    viewport: Viewport,
    // The distance on the complex plane between adjacent pixels,
    // horizontally and vertically.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Takes the size of the pixel grid and the viewport it covers.
    pub fn new(width: usize, height: usize, viewport: Viewport) -> Result<PlaneMapper, ConfigError> {
        let viewport = Viewport::new(viewport.x_min, viewport.y_min, viewport.x_max, viewport.y_max)?;
        // The image encoder takes u32 sides, and the grid needs the cell
        // count to fit in memory.
        let max_side = u32::max_value() as usize;
        if width == 0 || height == 0 || width > max_side || height > max_side || width.checked_mul(height).is_none() {
            return Err(ConfigError::BadSize(width, height));
        }
        Ok(PlaneMapper {
            width,
            height,
            viewport,
            steps: (
                viewport.width() / (width as f64),
                viewport.height() / (height as f64),
            ),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The viewport being mapped.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The total number of points in the pixel grid.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false: a mapper is never built over an empty grid.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a pixel, return the complex number at its lower-left
    /// corner.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.viewport.x_min + (pixel.0 as f64) * self.steps.0,
            self.viewport.y_min + (pixel.1 as f64) * self.steps.1,
        )
    }
}
