use super::{ArrangementShape, ControllerPosition, LEDS_PER_TILE, TILE_SIZE, TileArrangement};

const TILE: i32 = TILE_SIZE as i32;
const TILE_LEDS: i32 = LEDS_PER_TILE as i32;
/// Chain slots a tile spans beyond its own eight columns
const TILE_COLUMN_SKIP: i32 = TILE_LEDS - TILE;
const COLUMN_LEDS: i32 = 2 * TILE_LEDS;
const GRID_LEDS: i32 = 4 * TILE_LEDS;

/// Map a logical `(x, y)` coordinate to its index on the LED chain
///
/// `(0, 0)` is the top-left corner, `x` grows to the right and `y` grows
/// downward. Coordinates outside the grid yield `None`.
///
/// For every supported arrangement the mapping is a bijection between the
/// `width × height` grid and `0..chain_length`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn map_xy(x: i32, y: i32, arrangement: &TileArrangement) -> Option<usize> {
    let width = arrangement.matrix_width() as i32;
    let height = arrangement.matrix_height() as i32;
    if !(0..width).contains(&x) || !(0..height).contains(&y) {
        return None;
    }

    let visible = arrangement.controller() == ControllerPosition::Visible;
    let index = match arrangement.shape() {
        ArrangementShape::Row { tiles } => row_index(x, y, tiles, visible),
        ArrangementShape::Column => column_index(x, y, visible),
        ArrangementShape::Grid2x2 => grid_index(x, y, visible),
    };
    usize::try_from(index).ok()
}

/// Tiles side by side: row-major inside each tile, tile after tile.
/// A visible controller feeds the chain from the far end.
fn row_index(x: i32, y: i32, tiles: u8, visible: bool) -> i32 {
    let index = x + TILE * y + (x / TILE) * TILE_COLUMN_SKIP;
    if visible {
        i32::from(tiles) * TILE_LEDS - 1 - index
    } else {
        index
    }
}

/// Two tiles connected top to top, so the scan direction alternates.
/// The panel nearest the controller comes first on the chain.
fn column_index(x: i32, y: i32, visible: bool) -> i32 {
    let band = y / TILE;
    let panel = if (band == 0) == visible { 1 } else { 2 };
    (2 * band - 1) * (x + TILE * y) + panel * TILE_LEDS - 1 - band * (COLUMN_LEDS - 1)
}

/// 2×2 grid: the upper band runs backwards from the end of the chain,
/// the lower band forwards, each tile column shifted by one tile.
fn grid_index(x: i32, y: i32, visible: bool) -> i32 {
    let band = y / TILE;
    let column = x / TILE;
    let local = x + TILE * (y - TILE * band);
    let index = -(GRID_LEDS - 1) * (band - 1) + (2 * band - 1) * (local + column * TILE_COLUMN_SKIP);
    if visible {
        index - COLUMN_LEDS + GRID_LEDS * band
    } else {
        index
    }
}
