use super::{GLYPH_ROWS, Glyph, GlyphSource};

const FIRST_CHAR: char = ' ';
const LAST_CHAR: char = '~';

/// Advance width of the space character
const SPACE_WIDTH: u8 = 3;

/// Bitmaps for ASCII `0x20..=0x7E`, left aligned
const FONT_DATA: [[u8; GLYPH_ROWS]; 95] = [
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // space
    [0b10000, 0b10000, 0b10000, 0b00000, 0b10000], // !
    [0b10100, 0b10100, 0b00000, 0b00000, 0b00000], // "
    [0b01010, 0b11111, 0b01010, 0b11111, 0b01010], // #
    [0b01111, 0b10100, 0b01110, 0b00101, 0b11110], // $
    [0b11001, 0b11010, 0b00100, 0b01011, 0b10011], // %
    [0b01100, 0b10010, 0b01101, 0b10010, 0b01101], // &
    [0b10000, 0b10000, 0b00000, 0b00000, 0b00000], // quote
    [0b01000, 0b10000, 0b10000, 0b10000, 0b01000], // (
    [0b10000, 0b01000, 0b01000, 0b01000, 0b10000], // )
    [0b00000, 0b10100, 0b01000, 0b10100, 0b00000], // *
    [0b00000, 0b01000, 0b11100, 0b01000, 0b00000], // +
    [0b00000, 0b00000, 0b00000, 0b01000, 0b10000], // ,
    [0b00000, 0b00000, 0b11100, 0b00000, 0b00000], // -
    [0b00000, 0b00000, 0b00000, 0b00000, 0b10000], // .
    [0b00001, 0b00010, 0b00100, 0b01000, 0b10000], // /
    [0b01100, 0b10110, 0b11010, 0b10010, 0b01100], // 0
    [0b01000, 0b11000, 0b01000, 0b01000, 0b11100], // 1
    [0b11100, 0b00010, 0b01100, 0b10000, 0b11110], // 2
    [0b11110, 0b00010, 0b00100, 0b10010, 0b01100], // 3
    [0b00100, 0b01100, 0b10100, 0b11110, 0b00100], // 4
    [0b11110, 0b10000, 0b11100, 0b00010, 0b11100], // 5
    [0b00010, 0b00100, 0b01110, 0b10010, 0b01100], // 6
    [0b11110, 0b00010, 0b00100, 0b01000, 0b10000], // 7
    [0b01100, 0b10010, 0b01100, 0b10010, 0b01100], // 8
    [0b01100, 0b10010, 0b01110, 0b00100, 0b01000], // 9
    [0b00000, 0b10000, 0b00000, 0b10000, 0b00000], // :
    [0b00000, 0b01000, 0b00000, 0b01000, 0b10000], // ;
    [0b00100, 0b01000, 0b10000, 0b01000, 0b00100], // <
    [0b00000, 0b11100, 0b00000, 0b11100, 0b00000], // =
    [0b10000, 0b01000, 0b00100, 0b01000, 0b10000], // >
    [0b11100, 0b00010, 0b01100, 0b00000, 0b01000], // ?
    [0b01110, 0b10001, 0b10111, 0b10000, 0b01110], // @
    [0b01100, 0b10010, 0b11110, 0b10010, 0b10010], // A
    [0b11100, 0b10010, 0b11100, 0b10010, 0b11100], // B
    [0b01110, 0b10000, 0b10000, 0b10000, 0b01110], // C
    [0b11100, 0b10010, 0b10010, 0b10010, 0b11100], // D
    [0b11110, 0b10000, 0b11100, 0b10000, 0b11110], // E
    [0b11110, 0b10000, 0b11100, 0b10000, 0b10000], // F
    [0b01110, 0b10000, 0b10110, 0b10010, 0b01110], // G
    [0b10010, 0b10010, 0b11110, 0b10010, 0b10010], // H
    [0b11100, 0b01000, 0b01000, 0b01000, 0b11100], // I
    [0b11110, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10010, 0b10100, 0b11000, 0b10100, 0b10010], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b11110], // L
    [0b10001, 0b11011, 0b10101, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001], // N
    [0b01100, 0b10010, 0b10010, 0b10010, 0b01100], // O
    [0b11100, 0b10010, 0b11100, 0b10000, 0b10000], // P
    [0b01100, 0b10010, 0b10010, 0b10100, 0b01010], // Q
    [0b11100, 0b10010, 0b11100, 0b10100, 0b10010], // R
    [0b01110, 0b10000, 0b01100, 0b00010, 0b11100], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10010, 0b10010, 0b10010, 0b10010, 0b01100], // U
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10101, 0b11011, 0b10001], // W
    [0b10010, 0b10010, 0b01100, 0b10010, 0b10010], // X
    [0b10001, 0b01010, 0b00100, 0b00100, 0b00100], // Y
    [0b11110, 0b00100, 0b01000, 0b10000, 0b11110], // Z
    [0b11000, 0b10000, 0b10000, 0b10000, 0b11000], // [
    [0b10000, 0b01000, 0b00100, 0b00010, 0b00001], // backslash
    [0b11000, 0b01000, 0b01000, 0b01000, 0b11000], // ]
    [0b01000, 0b10100, 0b00000, 0b00000, 0b00000], // ^
    [0b00000, 0b00000, 0b00000, 0b00000, 0b11110], // _
    [0b10000, 0b01000, 0b00000, 0b00000, 0b00000], // `
    [0b00000, 0b01110, 0b10010, 0b10010, 0b01111], // a
    [0b10000, 0b10000, 0b11100, 0b10010, 0b11100], // b
    [0b00000, 0b01110, 0b10000, 0b10000, 0b01110], // c
    [0b00010, 0b00010, 0b01110, 0b10010, 0b01110], // d
    [0b00000, 0b01100, 0b11110, 0b10000, 0b01110], // e
    [0b00110, 0b01000, 0b11100, 0b01000, 0b01000], // f
    [0b01110, 0b10010, 0b01110, 0b00010, 0b01100], // g
    [0b10000, 0b10000, 0b11100, 0b10010, 0b10010], // h
    [0b10000, 0b00000, 0b10000, 0b10000, 0b10000], // i
    [0b00100, 0b00000, 0b00100, 0b10100, 0b01000], // j
    [0b10000, 0b10100, 0b11000, 0b10100, 0b10010], // k
    [0b10000, 0b10000, 0b10000, 0b10000, 0b01000], // l
    [0b00000, 0b11011, 0b10101, 0b10101, 0b10001], // m
    [0b00000, 0b11100, 0b10010, 0b10010, 0b10010], // n
    [0b00000, 0b01100, 0b10010, 0b10010, 0b01100], // o
    [0b00000, 0b11100, 0b10010, 0b11100, 0b10000], // p
    [0b00000, 0b01110, 0b10010, 0b01110, 0b00010], // q
    [0b00000, 0b01110, 0b10000, 0b10000, 0b10000], // r
    [0b00000, 0b01110, 0b11000, 0b00110, 0b11100], // s
    [0b01000, 0b11100, 0b01000, 0b01000, 0b00110], // t
    [0b00000, 0b10010, 0b10010, 0b10010, 0b01110], // u
    [0b00000, 0b10001, 0b10001, 0b01010, 0b00100], // v
    [0b00000, 0b10001, 0b10101, 0b10101, 0b01010], // w
    [0b00000, 0b10010, 0b01100, 0b01100, 0b10010], // x
    [0b00000, 0b10010, 0b01110, 0b00010, 0b01100], // y
    [0b00000, 0b11110, 0b00100, 0b01000, 0b11110], // z
    [0b01100, 0b01000, 0b11000, 0b01000, 0b01100], // {
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000], // |
    [0b11000, 0b01000, 0b01100, 0b01000, 0b11000], // }
    [0b00000, 0b01000, 0b10101, 0b00010, 0b00000], // ~
];

/// Built-in 5×5 ASCII font
///
/// Glyphs are left aligned and advance by their rightmost lit column, so
/// narrow characters such as `i` or `.` take less room. Anything outside
/// printable ASCII renders as a blank 5-wide glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font5x5;

impl GlyphSource for Font5x5 {
    fn glyph(&self, character: char) -> Glyph {
        if !(FIRST_CHAR..=LAST_CHAR).contains(&character) {
            return Glyph::BLANK;
        }
        let rows = FONT_DATA[character as usize - FIRST_CHAR as usize];
        Glyph::new(rows, glyph_width(rows))
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn glyph_width(rows: [u8; GLYPH_ROWS]) -> u8 {
    let mut columns = 0;
    let mut row = 0;
    while row < GLYPH_ROWS {
        columns |= rows[row];
        row += 1;
    }
    if columns == 0 {
        return SPACE_WIDTH;
    }
    (u8::BITS - 3 - columns.trailing_zeros()) as u8
}
