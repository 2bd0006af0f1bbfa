//! Scrolling text
//!
//! Text enters from the right (or bottom) edge, travels one column (or row)
//! per frame and leaves on the opposite edge. Every frame is redrawn from
//! scratch: clear, optional decoration, glyphs, show, pause.
//! Scrolling runs to completion and cannot be interrupted.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::Rgb,
    display::TileDisplay,
    layout::TileArrangement,
    math8::scale8,
    text::{GLYPH_ROWS, GlyphSource},
};

/// First row of glyphs scrolling left, before vertical centring
const TEXT_TOP_ROW: i32 = 2;
/// First column of glyphs scrolling up, before horizontal centring
const TEXT_LEFT_COLUMN: i32 = 2;
/// Underline row, before vertical centring
const UNDERLINE_ROW: i32 = 7;
/// Empty columns between two glyphs
const GLYPH_GAP: i32 = 1;
/// Rows each character takes when scrolling up
const LINE_HEIGHT: i32 = 6;
/// Background is shown at a sixth of the text brightness
const BACKGROUND_SCALE: u8 = 255 / 6;
/// Underline columns at or past this are erased once the text has passed
/// through. Moves one column left per frame from then on.
const UNDERLINE_ERASE_START: i32 = 23;

/// Direction the text travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Left,
    Up,
}

/// Decoration drawn with the format color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    None,
    /// Line under the text, only when scrolling left
    Underlined,
    /// Dimmed fill behind the text
    Background,
}

/// Parameters of a scroll animation
#[derive(Debug, Clone, Copy)]
pub struct ScrollOptions {
    pub direction: TextDirection,
    /// Pause after each frame; zero renders frames back to back
    pub delay: Duration,
    pub style: TextStyle,
    /// Underline or background color
    pub format_color: Rgb,
    pub text_color: Rgb,
}

impl ScrollOptions {
    /// Undecorated text scrolling left without pauses
    pub const fn new(text_color: Rgb) -> Self {
        Self {
            direction: TextDirection::Left,
            delay: Duration::from_ticks(0),
            style: TextStyle::None,
            format_color: Rgb { r: 0, g: 0, b: 0 },
            text_color,
        }
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the decoration and the color it is drawn with
    #[must_use]
    pub const fn with_style(mut self, style: TextStyle, format_color: Rgb) -> Self {
        self.style = style;
        self.format_color = format_color;
        self
    }
}

/// Visible area and centring offsets of a display
#[derive(Debug, Clone, Copy)]
struct Viewport {
    width: i32,
    height: i32,
    centre_h: i32,
    centre_v: i32,
}

impl Viewport {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn of(arrangement: &TileArrangement) -> Self {
        let width = arrangement.matrix_width() as i32;
        let height = arrangement.matrix_height() as i32;
        Self {
            width,
            height,
            centre_h: centre_offset(width),
            centre_v: centre_offset(height),
        }
    }
}

/// Offset that centres an 8-wide text band in `extent`
const fn centre_offset(extent: i32) -> i32 {
    if extent > 8 { extent / 2 - 4 } else { 0 }
}

impl<O: OutputDriver, D: DelayNs, const MAX_LEDS: usize> TileDisplay<O, D, MAX_LEDS> {
    /// Scroll `text` across the display
    ///
    /// Characters the font does not know take the room of a blank glyph.
    /// Every frame is shown and followed by `options.delay`. When a style is
    /// set the display is cleared and shown once more at the end.
    pub fn scroll_text<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        text: &str,
        options: &ScrollOptions,
    ) {
        let viewport = Viewport::of(self.arrangement());
        #[cfg(feature = "esp32-log")]
        println!(
            "[TileDisplay.scroll_text] {:?} on {}x{}",
            options.direction, viewport.width, viewport.height
        );

        match options.direction {
            TextDirection::Left => self.scroll_left(font, text, options, viewport),
            TextDirection::Up => self.scroll_up(font, text, options, viewport),
        }

        if options.style != TextStyle::None {
            self.clear();
            self.show();
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn scroll_left<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        text: &str,
        options: &ScrollOptions,
        viewport: Viewport,
    ) {
        let text_length: i32 = text
            .chars()
            .map(|character| i32::from(font.width(character)) + GLYPH_GAP)
            .sum();
        let top = TEXT_TOP_ROW + viewport.centre_v;
        let mut erase_from = UNDERLINE_ERASE_START;

        for column in 0..text_length + viewport.width {
            self.begin_frame(options);
            if options.style == TextStyle::Underlined {
                let erase = (column > text_length + 1).then_some(erase_from);
                self.draw_underline(viewport, column, erase, options.format_color);
            }

            let mut offset = 0;
            for character in text.chars() {
                let glyph = font.glyph(character);
                let width = i32::from(glyph.width);
                let start = viewport.width - column + offset;
                if start >= viewport.width {
                    break;
                }
                if start + width >= 0 {
                    for (row, col) in glyph.lit() {
                        let x = start + col as i32;
                        if (0..viewport.width).contains(&x) {
                            self.set_pixel(x, top + row as i32, options.text_color);
                        }
                    }
                }
                offset += width + GLYPH_GAP;
            }

            self.end_frame(options.delay);
            if column > text_length + 1 {
                erase_from -= 1;
            }
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn scroll_up<F: GlyphSource + ?Sized>(
        &mut self,
        font: &F,
        text: &str,
        options: &ScrollOptions,
        viewport: Viewport,
    ) {
        let characters = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        let text_height = characters.saturating_mul(LINE_HEIGHT);
        let left = TEXT_LEFT_COLUMN + viewport.centre_h;

        for row in 0..text_height.saturating_add(viewport.height) {
            self.begin_frame(options);

            let mut offset = 0;
            for character in text.chars() {
                let start = viewport.height - row + offset;
                if start >= viewport.height {
                    break;
                }
                if start + GLYPH_ROWS as i32 >= 0 {
                    let glyph = font.glyph(character);
                    for (glyph_row, col) in glyph.lit() {
                        let y = start + glyph_row as i32;
                        if (0..viewport.height).contains(&y) {
                            self.set_pixel(left + col as i32, y, options.text_color);
                        }
                    }
                }
                offset += LINE_HEIGHT;
            }

            self.end_frame(options.delay);
        }
    }

    /// Underline grows in from the right edge as the text enters.
    /// With `erase_from` set, columns from there on are turned off.
    fn draw_underline(
        &mut self,
        viewport: Viewport,
        column: i32,
        erase_from: Option<i32>,
        color: Rgb,
    ) {
        let row = UNDERLINE_ROW + viewport.centre_v;
        let line_col = viewport.width - column - 1;
        self.set_pixel(line_col, row, color);

        for x in line_col.max(0)..viewport.width {
            let erased = erase_from.is_some_and(|boundary| x >= boundary);
            self.set_pixel(x, row, if erased { Rgb::default() } else { color });
        }
    }

    fn begin_frame(&mut self, options: &ScrollOptions) {
        self.clear();
        if options.style == TextStyle::Background {
            let background = dim(options.format_color);
            self.buffer_mut().fill_all(background);
        }
    }

    fn end_frame(&mut self, delay: Duration) {
        self.show();
        if delay.as_ticks() > 0 {
            self.pause(delay);
        }
    }
}

fn dim(color: Rgb) -> Rgb {
    Rgb {
        r: scale8(color.r, BACKGROUND_SCALE),
        g: scale8(color.g, BACKGROUND_SCALE),
        b: scale8(color.b, BACKGROUND_SCALE),
    }
}
