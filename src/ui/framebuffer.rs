//! Page-addressed 1bpp framebuffer matching the SSD1306 GDDRAM layout.
//!
//! Byte `page * width + column` holds eight vertical pixels of one column;
//! bit `y % 8` is row `y` within that page.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::{OLED_BUFFER_LEN, OLED_PAGES, OLED_WIDTH, PAGE_HEIGHT};

/// Rectangle of the panel addressed by (column, page). Bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderRegion {
    pub start_column: u8,
    pub end_column: u8,
    pub start_page: u8,
    pub end_page: u8,
}

impl RenderRegion {
    /// The whole 128×64 panel.
    pub const fn full_screen() -> Self {
        Self {
            start_column: 0,
            end_column: (OLED_WIDTH - 1) as u8,
            start_page: 0,
            end_page: (OLED_PAGES - 1) as u8,
        }
    }

    pub fn width(&self) -> usize {
        usize::from(self.end_column.saturating_sub(self.start_column)) + 1
    }

    pub fn pages(&self) -> usize {
        usize::from(self.end_page.saturating_sub(self.start_page)) + 1
    }

    pub fn height(&self) -> usize {
        self.pages() * PAGE_HEIGHT
    }

    /// Bytes needed to hold this region.
    pub fn buffer_len(&self) -> usize {
        self.width() * self.pages()
    }

    /// How many text lines of `line_height` pixels fit without running off
    /// the bottom of the region.
    pub fn line_capacity(&self, line_height: i32) -> usize {
        self.line_capacity_from(0, line_height)
    }

    /// Like [`line_capacity`](Self::line_capacity), for lines starting
    /// `top` pixels below the region's top edge.
    pub fn line_capacity_from(&self, top: i32, line_height: i32) -> usize {
        if line_height <= 0 {
            return 0;
        }
        let remaining = self.height() as i32 - top.max(0);
        (remaining.max(0) / line_height) as usize
    }

    /// Panel draw area in pixels as `(start, end)`, end exclusive.
    ///
    /// Saturates at 255 so caller-built regions at the edge of the `u8`
    /// range cannot overflow.
    pub fn draw_area(&self) -> ((u8, u8), (u8, u8)) {
        let page_height = PAGE_HEIGHT as u8;
        let start = (
            self.start_column,
            self.start_page.saturating_mul(page_height),
        );
        let end = (
            self.end_column.saturating_add(1),
            self.end_page.saturating_add(1).saturating_mul(page_height),
        );
        (start, end)
    }
}

impl Default for RenderRegion {
    fn default() -> Self {
        Self::full_screen()
    }
}

/// Pixel buffer for one [`RenderRegion`].
///
/// Sized for the full panel; a smaller region uses a prefix of it.
/// Coordinates passed to the [`DrawTarget`] impl are relative to the
/// region's top-left corner. Pixels outside the region are dropped.
#[derive(Clone)]
pub struct FrameBuffer {
    region: RenderRegion,
    bytes: [u8; OLED_BUFFER_LEN],
}

impl FrameBuffer {
    pub fn new(region: RenderRegion) -> Self {
        Self {
            region,
            bytes: [0u8; OLED_BUFFER_LEN],
        }
    }

    pub fn region(&self) -> &RenderRegion {
        &self.region
    }

    /// Bytes covering the region, in transfer order.
    pub fn bytes(&self) -> &[u8] {
        let len = self.region.buffer_len().min(OLED_BUFFER_LEN);
        &self.bytes[..len]
    }

    /// Zero every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Set or reset one pixel. Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        let Some(index) = self.index(x, y) else {
            return false;
        };
        let mask = 1u8 << (y % PAGE_HEIGHT);
        if on {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }
        true
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        let index = self.index(x, y)?;
        Some(self.bytes[index] & (1u8 << (y % PAGE_HEIGHT)) != 0)
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        let width = self.region.width();
        if x >= width || y >= self.region.height() {
            return None;
        }
        let index = (y / PAGE_HEIGHT) * width + x;
        (index < OLED_BUFFER_LEN).then_some(index)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.region.width() as u32, self.region.height() as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 {
                self.set_pixel(coord.x as usize, coord.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}
