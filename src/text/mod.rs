//! Glyph bitmaps for text rendering

mod font5x5;

pub use font5x5::Font5x5;

/// Number of rows in a glyph bitmap
pub const GLYPH_ROWS: usize = 5;

/// Number of columns a glyph bitmap can use
pub const GLYPH_COLUMNS: usize = 5;

/// Advance width of characters a font does not know
pub const DEFAULT_GLYPH_WIDTH: u8 = 5;

/// 5×5 glyph bitmap
///
/// Each row uses its low five bits, bit 4 being the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub rows: [u8; GLYPH_ROWS],
    /// Columns the glyph advances the cursor by, not counting the gap
    pub width: u8,
}

impl Glyph {
    /// Blank glyph of the default width
    pub const BLANK: Self = Self {
        rows: [0; GLYPH_ROWS],
        width: DEFAULT_GLYPH_WIDTH,
    };

    pub const fn new(rows: [u8; GLYPH_ROWS], width: u8) -> Self {
        Self { rows, width }
    }

    /// Whether the bit at `(row, column)` is set
    pub const fn is_lit(&self, row: usize, column: usize) -> bool {
        if row >= GLYPH_ROWS || column >= GLYPH_COLUMNS {
            return false;
        }
        self.rows[row] & (1 << (GLYPH_COLUMNS - 1 - column)) != 0
    }

    /// Iterate over the `(row, column)` positions of lit bits
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLUMNS)
                .filter(move |&column| self.is_lit(row, column))
                .map(move |column| (row, column))
        })
    }
}

/// Source of glyph bitmaps
///
/// Characters the source does not know should map to [`Glyph::BLANK`].
pub trait GlyphSource {
    fn glyph(&self, character: char) -> Glyph;

    /// Advance width of `character`
    fn width(&self, character: char) -> u8 {
        self.glyph(character).width
    }
}

/// Font without any bitmaps: every character is a blank 5-wide glyph
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankFont;

impl GlyphSource for BlankFont {
    fn glyph(&self, _character: char) -> Glyph {
        Glyph::BLANK
    }
}
