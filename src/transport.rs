use crate::{LightingCommand, MidiError, SYSEX_FOOTER, SYSEX_HEADER};

const MODE_COMMAND: u8 = 0x0E;

/// Which side controls the pads.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum DeviceMode {
    /// The device's own note and session layouts, also used by DAW integrations
    Live = 0,
    /// Every pad reports its raw id and shows whatever the host lights
    Programmer = 1,
}

impl DeviceMode {
    /// The vendor message switching the device into this mode
    pub fn message(self) -> [u8; 9] {
        let mut bytes = [0; 9];
        bytes[..6].copy_from_slice(&SYSEX_HEADER);
        bytes[6] = MODE_COMMAND;
        bytes[7] = self as u8;
        bytes[8] = SYSEX_FOOTER;
        bytes
    }

    pub(crate) fn from_message(data: &[u8]) -> Option<Self> {
        match data {
            [header @ .., MODE_COMMAND, mode, SYSEX_FOOTER] if header == SYSEX_HEADER => {
                match *mode {
                    0 => Some(DeviceMode::Live),
                    1 => Some(DeviceMode::Programmer),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// What the instrument needs from the device connection.
///
/// [`launchpad_x::Output`](crate::launchpad_x::Output) talks to real hardware,
/// [`RecordingTransport`](crate::RecordingTransport) keeps everything in memory.
pub trait DeviceTransport {
    /// Send a 3-byte channel voice message
    fn send_short(&mut self, bytes: [u8; 3]) -> Result<(), MidiError>;

    /// Send a complete SysEx message, including header and footer
    fn send_extended(&mut self, bytes: &[u8]) -> Result<(), MidiError>;

    fn set_mode(&mut self, mode: DeviceMode) -> Result<(), MidiError>;

    fn send_command(&mut self, command: &LightingCommand) -> Result<(), MidiError> {
        match command {
            LightingCommand::Short(bytes) => self.send_short(*bytes),
            LightingCommand::Extended(bytes) => self.send_extended(bytes),
        }
    }
}

impl<T: DeviceTransport + ?Sized> DeviceTransport for &mut T {
    fn send_short(&mut self, bytes: [u8; 3]) -> Result<(), MidiError> {
        (**self).send_short(bytes)
    }

    fn send_extended(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        (**self).send_extended(bytes)
    }

    fn set_mode(&mut self, mode: DeviceMode) -> Result<(), MidiError> {
        (**self).set_mode(mode)
    }
}
