use midir::MidiOutputConnection;

use crate::{DeviceMode, DeviceTransport, MidiError, OutputDevice};

/// The object handling any messages _to_ the Launchpad X. The connection to the device gets
/// closed when this object goes out of scope.
///
/// ```no_run
/// # use launchy_edo::{DeviceMode, DeviceTransport, OutputDevice};
/// let mut output = launchy_edo::launchpad_x::Output::guess()?;
/// output.set_mode(DeviceMode::Programmer)?;
///
/// // light the bottom left pad green
/// output.send_short([0x90, 11, 21])?;
/// # Ok::<(), launchy_edo::MidiError>(())
/// ```
pub struct Output {
    connection: MidiOutputConnection,
}

impl OutputDevice for Output {
    const MIDI_CONNECTION_NAME: &'static str = "Launchy EDO output";

    /// The Launchpad X advertises a "DAW" and a "MIDI" interface. Programmer mode lighting only
    /// works through the MIDI one.
    const MIDI_DEVICE_KEYWORD: &'static str = "LPX MIDI";

    fn from_connection(connection: MidiOutputConnection) -> Result<Self, MidiError> {
        Ok(Self { connection })
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        self.connection.send(bytes)?;
        Ok(())
    }
}

impl DeviceTransport for Output {
    fn send_short(&mut self, bytes: [u8; 3]) -> Result<(), MidiError> {
        self.send(&bytes)
    }

    fn send_extended(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        self.send(bytes)
    }

    fn set_mode(&mut self, mode: DeviceMode) -> Result<(), MidiError> {
        log::info!("switching device to {:?} mode", mode);
        self.send(&mode.message())
    }
}
