use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The maximum value of a MIDI data byte, and thereby of a palette index or RGB channel
pub const MAX_DATA_BYTE: u8 = 127;

/// A color from the Launchpad X built-in palette. See the palette table in the "Launchpad X
/// Programmer's Reference Manual" for what each of the 128 indices looks like.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteColor {
    id: u8,
}

impl PaletteColor {
    pub const OFF: PaletteColor = Self { id: 0 };
    pub const WHITE: PaletteColor = Self { id: 3 };
    pub const RED: PaletteColor = Self { id: 5 };
    pub const ORANGE: PaletteColor = Self { id: 9 };
    pub const PALE_GREEN: PaletteColor = Self { id: 17 };
    pub const GREEN: PaletteColor = Self { id: 21 };
    pub const BLUE: PaletteColor = Self { id: 37 };
    pub const PURPLE: PaletteColor = Self { id: 45 };
    pub const PINK: PaletteColor = Self { id: 53 };

    pub fn new(id: u8) -> Result<Self> {
        let self_ = Self { id };
        if !self_.is_valid() {
            return Err(Error::InvalidColor(format!(
                "palette index {} exceeds {}",
                id, MAX_DATA_BYTE
            )));
        }
        Ok(self_)
    }

    pub fn is_valid(&self) -> bool {
        self.id <= MAX_DATA_BYTE
    }

    pub fn id(&self) -> u8 {
        self.id
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
/// An RGB color. Each component may only go up to 127.
pub struct RgbColor {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl RgbColor {
    /// Create a new RgbColor from the individual component values
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self> {
        let self_ = Self { r, g, b };
        if !self_.is_valid() {
            return Err(Error::InvalidColor(format!(
                "rgb ({}, {}, {}) has a component above {}",
                r, g, b, MAX_DATA_BYTE
            )));
        }
        Ok(self_)
    }

    /// Check whether the rgb color is valid - each component may only go up to MAX_DATA_BYTE.
    pub fn is_valid(&self) -> bool {
        self.r <= MAX_DATA_BYTE && self.g <= MAX_DATA_BYTE && self.b <= MAX_DATA_BYTE
    }

    pub fn red(&self) -> u8 {
        self.r
    }
    pub fn green(&self) -> u8 {
        self.g
    }
    pub fn blue(&self) -> u8 {
        self.b
    }
}

fn full_brightness() -> f32 {
    1.0
}

/// What a pad should show: either a palette entry, or an RGB color dimmed by a brightness
/// factor in `0.0..=1.0`.
///
/// ```
/// # use launchy_edo::{Color, RgbColor};
/// let dim_magenta = Color::rgb(RgbColor::new(127, 0, 103)?, 0.1)?;
/// assert_eq!(dim_magenta.scaled_rgb(), Some((13, 0, 10)));
/// # Ok::<(), launchy_edo::Error>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Palette(PaletteColor),
    Rgb {
        color: RgbColor,
        #[serde(default = "full_brightness")]
        brightness: f32,
    },
}

impl Color {
    pub const OFF: Color = Color::Palette(PaletteColor::OFF);

    pub fn palette(id: u8) -> Result<Self> {
        PaletteColor::new(id).map(Color::Palette)
    }

    pub fn rgb(color: RgbColor, brightness: f32) -> Result<Self> {
        let self_ = Color::Rgb { color, brightness };
        self_.validate()?;
        Ok(self_)
    }

    /// An RGB color shown at full brightness
    pub fn full(color: RgbColor) -> Self {
        Color::Rgb {
            color,
            brightness: 1.0,
        }
    }

    pub fn is_off(&self) -> bool {
        match self {
            Color::Palette(color) => color.id() == 0,
            Color::Rgb { .. } => self.scaled_rgb() == Some((0, 0, 0)),
        }
    }

    /// Check that every value that ends up in a data byte lies in 0..=127 and that the
    /// brightness lies in 0..=1.
    pub fn validate(&self) -> Result<()> {
        match self {
            Color::Palette(color) => {
                if !color.is_valid() {
                    return Err(Error::InvalidColor(format!(
                        "palette index {} exceeds {}",
                        color.id(),
                        MAX_DATA_BYTE
                    )));
                }
            }
            Color::Rgb { color, brightness } => {
                if !color.is_valid() {
                    return Err(Error::InvalidColor(format!(
                        "rgb ({}, {}, {}) has a component above {}",
                        color.red(),
                        color.green(),
                        color.blue(),
                        MAX_DATA_BYTE
                    )));
                }
                if !(0.0..=1.0).contains(brightness) {
                    return Err(Error::InvalidColor(format!(
                        "brightness {} is outside 0..=1",
                        brightness
                    )));
                }
            }
        }
        Ok(())
    }

    /// The channel bytes after brightness scaling, `round(channel * brightness)`. `None` for
    /// palette colors.
    pub fn scaled_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Palette(_) => None,
            Color::Rgb { color, brightness } => {
                let scale = |channel: u8| (channel as f32 * brightness).round() as u8;
                Some((scale(color.red()), scale(color.green()), scale(color.blue())))
            }
        }
    }

    /// The nearest valid color: palette index and channels capped at 127, brightness pulled
    /// into 0..=1 (NaN counts as 0).
    pub fn clamped(&self) -> Color {
        match *self {
            Color::Palette(color) => Color::Palette(PaletteColor {
                id: color.id().min(MAX_DATA_BYTE),
            }),
            Color::Rgb { color, brightness } => Color::Rgb {
                color: RgbColor {
                    r: color.red().min(MAX_DATA_BYTE),
                    g: color.green().min(MAX_DATA_BYTE),
                    b: color.blue().min(MAX_DATA_BYTE),
                },
                brightness: if brightness.is_nan() {
                    0.0
                } else {
                    brightness.clamp(0.0, 1.0)
                },
            },
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::OFF
    }
}

impl From<PaletteColor> for Color {
    fn from(color: PaletteColor) -> Self {
        Color::Palette(color)
    }
}

impl From<RgbColor> for Color {
    fn from(color: RgbColor) -> Self {
        Color::full(color)
    }
}
