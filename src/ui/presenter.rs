//! Full clear-and-redraw text presenter.
//!
//! Every render zeroes the framebuffer and pushes it to the panel before
//! drawing, then pushes the finished frame. There is no incremental or
//! partial-region update.

use core::iter::Take;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::config::{LINE_HEIGHT, MAX_CHARS_PER_LINE};
use crate::ui::framebuffer::{FrameBuffer, RenderRegion};
use crate::ui::wrap::{wrap, Line, Wrap};

/// Destination of finished frames (the display controller, or a test double).
pub trait FrameSink {
    type Error;

    /// Transfer `bytes` into `region` of the panel.
    fn write_frame(&mut self, region: &RenderRegion, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Owns the framebuffer and its render region.
pub struct DisplayPresenter<S> {
    sink: S,
    frame: FrameBuffer,
    max_chars: usize,
    line_height: i32,
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(BinaryColor::On)
        .build()
}

impl<S: FrameSink> DisplayPresenter<S> {
    /// Presenter with the default line geometry.
    pub fn new(sink: S, region: RenderRegion) -> Self {
        Self::with_layout(sink, region, MAX_CHARS_PER_LINE, LINE_HEIGHT)
    }

    pub fn with_layout(sink: S, region: RenderRegion, max_chars: usize, line_height: i32) -> Self {
        Self {
            sink,
            frame: FrameBuffer::new(region),
            max_chars,
            line_height,
        }
    }

    pub fn region(&self) -> &RenderRegion {
        self.frame.region()
    }

    /// Current framebuffer contents.
    pub fn buffer(&self) -> &[u8] {
        self.frame.bytes()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Zero the framebuffer and flush it, erasing whatever is on screen.
    pub fn clear(&mut self) -> Result<(), S::Error> {
        self.frame.clear();
        self.flush()
    }

    /// Clear, draw `lines` of `source` top-down from `origin`, then flush.
    ///
    /// Line `i` has its top edge at `origin.y + i * line_height`. The caller
    /// must keep the line count within [`RenderRegion::line_capacity`].
    pub fn present<I>(
        &mut self,
        source: &str,
        lines: I,
        origin: Point,
        line_height: i32,
    ) -> Result<(), S::Error>
    where
        I: IntoIterator<Item = Line>,
    {
        self.clear()?;

        let style = text_style();
        for (row, line) in lines.into_iter().enumerate() {
            let y = origin.y + row as i32 * line_height;
            let _ = Text::with_baseline(
                line.text(source),
                Point::new(origin.x, y),
                style,
                Baseline::Top,
            )
            .draw(&mut self.frame);
        }

        self.flush()
    }

    /// Lines of `text` that [`show`](Self::show) draws from `origin`:
    /// wrapped to the configured width and cut at the rows left below
    /// `origin.y`.
    pub fn layout<'a>(&self, text: &'a str, origin: Point) -> Take<Wrap<'a>> {
        let capacity = self
            .frame
            .region()
            .line_capacity_from(origin.y, self.line_height);
        wrap(text, self.max_chars).take(capacity)
    }

    /// Wrap `text` to the configured width and present as many lines as
    /// fit below `origin`.
    pub fn show(&mut self, text: &str, origin: Point) -> Result<(), S::Error> {
        let lines = self.layout(text, origin);
        let line_height = self.line_height;
        self.present(text, lines, origin, line_height)
    }

    fn flush(&mut self) -> Result<(), S::Error> {
        let region = *self.frame.region();
        self.sink.write_frame(&region, self.frame.bytes())
    }
}
