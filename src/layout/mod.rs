//! Tile arrangement and logical-to-chain addressing
//!
//! A display is made of 8×8 tiles. The tiles are daisy-chained, and the
//! order of LEDs along the chain depends on how many tiles there are, where
//! each tile sits, and whether the controller board is mounted visibly in
//! front of the matrix or hidden behind it.

mod mapper;

use core::fmt;

pub use mapper::map_xy;

/// Side length of one tile in LEDs
pub const TILE_SIZE: usize = 8;

/// Number of LEDs on one tile
pub const LEDS_PER_TILE: usize = TILE_SIZE * TILE_SIZE;

/// Where the controller board sits relative to the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerPosition {
    /// Behind the matrix, out of sight. Use this for a single tile.
    #[default]
    Hidden,
    /// In front of the matrix, which reverses the chain's scan direction
    Visible,
}

/// Wiring family of a tile arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangementShape {
    /// One row of tiles, including a single tile
    Row { tiles: u8 },
    /// Two tiles stacked vertically, connected top to top
    Column,
    /// Two rows of two tiles
    Grid2x2,
}

impl ArrangementShape {
    /// Select the wiring family for a tile count
    pub const fn from_tiles(horizontal: u8, vertical: u8) -> Result<Self, ArrangementError> {
        match (horizontal, vertical) {
            (0, _) | (_, 0) => Err(ArrangementError::NoTiles),
            (tiles, 1) => Ok(Self::Row { tiles }),
            (1, 2) => Ok(Self::Column),
            (2, 2) => Ok(Self::Grid2x2),
            _ => Err(ArrangementError::Unsupported {
                horizontal,
                vertical,
            }),
        }
    }
}

/// Error returned for tile counts that have no known wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangementError {
    /// At least one tile is required in each direction
    NoTiles,
    /// Only rows of tiles, a column of two and a 2×2 grid are wired
    Unsupported { horizontal: u8, vertical: u8 },
}

impl fmt::Display for ArrangementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTiles => write!(f, "tile arrangement needs at least one tile"),
            Self::Unsupported {
                horizontal,
                vertical,
            } => write!(f, "unsupported tile arrangement {horizontal}x{vertical}"),
        }
    }
}

impl core::error::Error for ArrangementError {}

/// Immutable description of a tiled display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileArrangement {
    tiles_horizontal: u8,
    tiles_vertical: u8,
    controller: ControllerPosition,
    shape: ArrangementShape,
}

impl TileArrangement {
    pub const fn new(
        tiles_horizontal: u8,
        tiles_vertical: u8,
        controller: ControllerPosition,
    ) -> Result<Self, ArrangementError> {
        let shape = match ArrangementShape::from_tiles(tiles_horizontal, tiles_vertical) {
            Ok(shape) => shape,
            Err(error) => return Err(error),
        };
        Ok(Self {
            tiles_horizontal,
            tiles_vertical,
            controller,
            shape,
        })
    }

    /// A single tile with the controller behind it
    pub const fn single() -> Self {
        Self {
            tiles_horizontal: 1,
            tiles_vertical: 1,
            controller: ControllerPosition::Hidden,
            shape: ArrangementShape::Row { tiles: 1 },
        }
    }

    pub const fn tiles_horizontal(&self) -> u8 {
        self.tiles_horizontal
    }

    pub const fn tiles_vertical(&self) -> u8 {
        self.tiles_vertical
    }

    pub const fn controller(&self) -> ControllerPosition {
        self.controller
    }

    pub const fn shape(&self) -> ArrangementShape {
        self.shape
    }

    /// Width of the logical grid in LEDs
    pub const fn matrix_width(&self) -> usize {
        TILE_SIZE * self.tiles_horizontal as usize
    }

    /// Height of the logical grid in LEDs
    pub const fn matrix_height(&self) -> usize {
        TILE_SIZE * self.tiles_vertical as usize
    }

    /// Total number of LEDs on the chain
    pub const fn chain_length(&self) -> usize {
        LEDS_PER_TILE * self.tiles_horizontal as usize * self.tiles_vertical as usize
    }

    /// Chain index of the logical coordinate `(x, y)`
    ///
    /// Returns `None` outside the grid.
    pub fn map_xy(&self, x: i32, y: i32) -> Option<usize> {
        map_xy(x, y, self)
    }
}
