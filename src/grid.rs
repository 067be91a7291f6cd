use crate::{Error, Result};

/// Number of pad rows and columns on the playable grid.
pub const GRID_SIZE: u8 = 8;

/// One pad of the 8x8 playing surface.
///
/// Rows are counted 1..=8 from bottom to top, columns 1..=8 from left to right. The device
/// identifies the same pad by `row * 10 + column`, so the bottom left pad is 11 and the top
/// right pad is 88. Ids ending in 9 or starting with 9 belong to the control buttons on the
/// right-hand side and on top, and are never valid coordinates.
///
/// ```
/// # use launchy_edo::GridCoordinate;
/// let pad = GridCoordinate::from_grid(2, 3)?;
/// assert_eq!(pad.device_id(), 23);
/// assert_eq!(GridCoordinate::from_device_id(23)?, pad);
/// # Ok::<(), launchy_edo::Error>(())
/// ```
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct GridCoordinate {
    // Field order makes the derived ordering row-major
    row: u8,
    column: u8,
}

impl GridCoordinate {
    pub fn from_grid(row: u8, column: u8) -> Result<Self> {
        if !is_on_grid(row) || !is_on_grid(column) {
            return Err(Error::InvalidCoordinate {
                row: row as i32,
                column: column as i32,
            });
        }
        Ok(Self { row, column })
    }

    pub fn from_device_id(device_id: u8) -> Result<Self> {
        let column = device_id % 10;
        let row = (device_id - column) / 10;
        Self::from_grid(row, column)
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn device_id(&self) -> u8 {
        self.row * 10 + self.column
    }

    /// All 64 pads in row-major order, bottom row first and left to right within a row.
    pub fn all() -> impl Iterator<Item = GridCoordinate> {
        (1..=GRID_SIZE)
            .flat_map(|row| (1..=GRID_SIZE).map(move |column| GridCoordinate { row, column }))
    }
}

fn is_on_grid(value: u8) -> bool {
    (1..=GRID_SIZE).contains(&value)
}

/// Whether the id names one of the control buttons along the top row or the right column.
///
/// The device reports these with a 9 in the tens or units digit (19, 29, ..., 89 on the right
/// and 91..=99 on top).
pub fn is_button_id(id: u8) -> bool {
    (10..=99).contains(&id) && (id / 10 == 9 || id % 10 == 9)
}
