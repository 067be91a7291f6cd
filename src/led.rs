use crate::{Color, DegreeColorPolicy, Error, GridCoordinate, PitchMap, Result};

/// Start of every Launchpad X vendor message: SysEx start, Novation's manufacturer id and the
/// Launchpad X device bytes.
pub const SYSEX_HEADER: [u8; 6] = [0xF0, 0x00, 0x20, 0x29, 0x02, 0x0C];
pub const SYSEX_FOOTER: u8 = 0xF7;

const LED_COMMAND: u8 = 0x03;
const RGB_SUBCOMMAND: u8 = 0x04;

const NOTE_ON: u8 = 0x90;

/// Status byte of the note-on message that shows a palette color in `mode`
pub fn note_on_status(mode: LightingMode) -> u8 {
    NOTE_ON + mode.channel() - 1
}

/// How a pad shows its color. For palette colors the mode is the MIDI channel of the short
/// lighting message.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum LightingMode {
    /// A straight consistent light
    Static = 1,
    /// On->Off->On->Off->... in time with the device clock
    Flashing = 2,
    /// A smooth pulse
    Pulsing = 3,
    /// Full RGB color. Sent as a SysEx message for RGB colors.
    Rgb = 4,
}

impl LightingMode {
    pub fn channel(self) -> u8 {
        self as u8
    }

    /// The mode a color is shown in when a pad is idle
    pub fn for_color(color: &Color) -> Self {
        match color {
            Color::Palette(_) => LightingMode::Static,
            Color::Rgb { .. } => LightingMode::Rgb,
        }
    }
}

/// A single serialized lighting update, ready for the transport.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum LightingCommand {
    /// `[note-on status for the mode's channel, pad id, palette index]`
    Short([u8; 3]),
    /// Header, `03 04`, pad id, three channel bytes, footer
    Extended(Vec<u8>),
}

impl LightingCommand {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            LightingCommand::Short(bytes) => bytes,
            LightingCommand::Extended(bytes) => bytes,
        }
    }

    /// The device id of the pad this command lights, `None` if the bytes are too short to
    /// hold one.
    pub fn pad(&self) -> Option<u8> {
        match self {
            LightingCommand::Short(bytes) => Some(bytes[1]),
            LightingCommand::Extended(bytes) => bytes.get(SYSEX_HEADER.len() + 2).copied(),
        }
    }

    /// Space separated two-digit uppercase hex pairs, the form hosts take SysEx strings in.
    pub fn to_hex_string(&self) -> String {
        self.as_bytes()
            .iter()
            .map(|byte| format!("{:02X}", byte))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Turns (pad, color, mode) into the Launchpad X lighting messages.
#[derive(Debug, Copy, Clone, Default)]
pub struct LedCommandEncoder;

impl LedCommandEncoder {
    /// Encode one lighting update.
    ///
    /// Palette colors produce a short note-on message on the mode's channel, in any mode. RGB
    /// colors can only be shown in [`LightingMode::Rgb`] and produce the SysEx form with the
    /// brightness already applied. Out-of-range values give `InvalidColor`.
    ///
    /// ```
    /// # use launchy_edo::{Color, GridCoordinate, LedCommandEncoder, LightingMode, PaletteColor};
    /// let pad = GridCoordinate::from_grid(1, 1)?;
    /// let command = LedCommandEncoder.encode(pad, PaletteColor::GREEN.into(), LightingMode::Pulsing)?;
    /// assert_eq!(command.as_bytes(), &[0x92, 11, 21]);
    /// # Ok::<(), launchy_edo::Error>(())
    /// ```
    pub fn encode(
        &self,
        pad: GridCoordinate,
        color: Color,
        mode: LightingMode,
    ) -> Result<LightingCommand> {
        color.validate()?;
        if matches!(color, Color::Rgb { .. }) && mode != LightingMode::Rgb {
            return Err(Error::InvalidColor(format!(
                "RGB colors can't be shown in {:?} mode",
                mode
            )));
        }
        Ok(serialize(pad.device_id(), &color, mode))
    }

    /// Like [`encode`](Self::encode) but never fails: the color is clamped into range and RGB
    /// colors fall back to RGB mode. Used while performing, where a bad value must not stop the
    /// input stream.
    pub fn encode_clamped(
        &self,
        pad: GridCoordinate,
        color: Color,
        mode: LightingMode,
    ) -> LightingCommand {
        let mut color = color;
        if let Err(e) = color.validate() {
            log::warn!("clamping color for pad {}: {}", pad.device_id(), e);
            color = color.clamped();
        }

        let mode = match color {
            Color::Rgb { .. } => LightingMode::Rgb,
            Color::Palette(_) => mode,
        };
        serialize(pad.device_id(), &color, mode)
    }

    /// The idle color for every pad, one command each, in row-major order.
    pub fn reset_all(
        &self,
        pitch_map: &PitchMap,
        policy: &DegreeColorPolicy,
    ) -> Result<Vec<LightingCommand>> {
        GridCoordinate::all()
            .map(|pad| {
                let color = policy.color_for(pitch_map.pitch_of(pad));
                self.encode(pad, color, LightingMode::for_color(&color))
            })
            .collect()
    }
}

fn serialize(device_id: u8, color: &Color, mode: LightingMode) -> LightingCommand {
    match color {
        Color::Palette(palette) => {
            LightingCommand::Short([note_on_status(mode), device_id, palette.id()])
        }
        Color::Rgb { .. } => {
            // Only RGB colors reach here, so scaled_rgb is always Some
            let (r, g, b) = color.scaled_rgb().unwrap_or((0, 0, 0));

            let mut bytes = Vec::with_capacity(SYSEX_HEADER.len() + 7);
            bytes.extend_from_slice(&SYSEX_HEADER);
            bytes.extend([LED_COMMAND, RGB_SUBCOMMAND, device_id, r, g, b]);
            bytes.push(SYSEX_FOOTER);
            LightingCommand::Extended(bytes)
        }
    }
}
