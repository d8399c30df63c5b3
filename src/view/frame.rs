//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use devbyte::resizable::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Pixel span covered by `rect`, clamped to `width` x `height`
#[inline]
fn pixel_span(rect: Rect, width: usize, height: usize) -> (usize, usize, usize, usize) {
    let x0 = (rect.x.max(0.0) as usize).min(width);
    let y0 = (rect.y.max(0.0) as usize).min(height);
    let x1 = ((rect.x + rect.width).max(0.0) as usize).min(width);
    let y1 = ((rect.y + rect.height).max(0.0) as usize).min(height);
    (x0, y0, x1, y1)
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    /// Set a clipping rectangle. All subsequent drawing operations will be
    /// constrained to this region.
    pub fn set_clip(&mut self, rect: Rect) {
        let (x0, y0, x1, y1) = pixel_span(rect, self.width, self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Span of `rect` after frame bounds and the clip rect are applied
    fn clipped(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let (x0, y0, x1, y1) = pixel_span(rect, self.width, self.height);
        match self.clip {
            Some(c) => (x0.max(c.x0), y0.max(c.y0), x1.min(c.x1), y1.min(c.y1)),
            None => (x0, y0, x1, y1),
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.clipped(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1.max(x0)].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color | 0xFF000000);
        }

        let (x0, y0, x1, y1) = self.clipped(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Fill a rectangle with a left-to-right gradient between two colors
    pub fn fill_gradient_h(&mut self, rect: Rect, from: u32, to: u32) {
        let (x0, y0, x1, y1) = self.clipped(rect);
        let span = rect.width.max(1.0);
        for x in x0..x1 {
            let t = ((x as f64 - rect.x) / span).clamp(0.0, 1.0) as f32;
            let color = blend_colors(from, to, t);
            for y in y0..y1 {
                self.buffer[y * self.width + x] = color;
            }
        }
    }

    /// Draw a 1px border around `rect`, optionally filling the interior
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill: Option<u32>, border: u32) {
        if let Some(fill) = fill {
            self.fill_rect(rect, fill);
        }
        let right = rect.x + rect.width - 1.0;
        let bottom = rect.y + rect.height - 1.0;
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1.0), border);
        self.fill_rect(Rect::new(rect.x, bottom, rect.width, 1.0), border);
        self.fill_rect(Rect::new(rect.x, rect.y, 1.0, rect.height), border);
        self.fill_rect(Rect::new(right, rect.y, 1.0, rect.height), border);
    }

    /// Read a pixel (0 when out of bounds)
    /// Blend `color` into one pixel with `alpha` coverage, honoring the clip
    #[inline]
    pub fn blend_pixel(&mut self, x: isize, y: isize, color: u32, alpha: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let (x0, y0, x1, y1) = match self.clip {
            Some(c) => (c.x0, c.y0, c.x1.min(self.width), c.y1.min(self.height)),
            None => (0, 0, self.width, self.height),
        };
        if x < x0 || x >= x1 || y < y0 || y >= y1 {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }
}
