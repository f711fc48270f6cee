// Display adapters: frame-oriented text output on a fixed-geometry monochrome panel

mod log;
#[cfg(target_os = "linux")]
mod oled;

pub use log::LogDisplay;
#[cfg(target_os = "linux")]
pub use oled::OledDisplay;

use crate::config::{DisplayConfig, DisplayKind};
use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

/// Panel geometry in pixels (SSD1306 128x32).
pub const PANEL_WIDTH: u32 = 128;
pub const PANEL_HEIGHT: u32 = 32;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("opening display bus {path}: {reason}")]
    Bus { path: String, reason: String },
    #[error("display init failed: {0}")]
    Init(String),
    #[error("drawing to display failed: {0}")]
    Draw(String),
    #[error("flushing display failed: {0}")]
    Flush(String),
    #[error("display kind {0:?} is not supported on this platform")]
    Unsupported(DisplayKind),
}

/// Frame contract: `begin_frame`, any number of `draw_line`, then `end_frame`.
pub trait DisplayAdapter {
    /// Clear the whole drawable area to background.
    fn begin_frame(&mut self) -> Result<(), DisplayError>;

    /// Draw `text` on text row `row` (0-based). Rows off the panel are clipped.
    fn draw_line(&mut self, row: usize, text: &str) -> Result<(), DisplayError>;

    /// Commit the frame to the device.
    fn end_frame(&mut self) -> Result<(), DisplayError>;
}

impl<D: DisplayAdapter + ?Sized> DisplayAdapter for Box<D> {
    fn begin_frame(&mut self) -> Result<(), DisplayError> {
        (**self).begin_frame()
    }

    fn draw_line(&mut self, row: usize, text: &str) -> Result<(), DisplayError> {
        (**self).draw_line(row, text)
    }

    fn end_frame(&mut self) -> Result<(), DisplayError> {
        (**self).end_frame()
    }
}

/// Top-left pixel of text row `row`, or `None` if the row starts below a panel
/// `panel_height` pixels tall.
pub fn row_origin(row: usize, line_height: u32, panel_height: u32) -> Option<Point> {
    let y = u32::try_from(row).ok()?.checked_mul(line_height)?;
    if y >= panel_height {
        return None;
    }
    Some(Point::new(0, i32::try_from(y).ok()?))
}

/// Draw `text` in FONT_6X10 on text row `row` of `target`. Rows starting below
/// the target are skipped; the target clips whatever overhangs its edges.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub(crate) fn draw_text_row<T>(
    target: &mut T,
    row: usize,
    text: &str,
    line_height: u32,
) -> Result<(), T::Error>
where
    T: DrawTarget<Color = BinaryColor>,
{
    let height = target.bounding_box().size.height;
    let Some(origin) = row_origin(row, line_height, height) else {
        return Ok(());
    };
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    Text::with_baseline(text, origin, style, Baseline::Top).draw(target)?;
    Ok(())
}

/// Open the adapter selected by `config.kind`. Called once at startup.
pub fn open(config: &DisplayConfig) -> Result<Box<dyn DisplayAdapter>, DisplayError> {
    match config.kind {
        DisplayKind::Log => Ok(Box::new(LogDisplay::new())),
        DisplayKind::Oled => open_oled(config),
    }
}

#[cfg(target_os = "linux")]
fn open_oled(config: &DisplayConfig) -> Result<Box<dyn DisplayAdapter>, DisplayError> {
    Ok(Box::new(OledDisplay::open(config)?))
}

#[cfg(not(target_os = "linux"))]
fn open_oled(config: &DisplayConfig) -> Result<Box<dyn DisplayAdapter>, DisplayError> {
    Err(DisplayError::Unsupported(config.kind))
}
