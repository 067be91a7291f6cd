use crate::{DeviceMode, DeviceTransport, LightingCommand, MidiError};

/// One call made on a [`RecordingTransport`].
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum Sent {
    Short([u8; 3]),
    Extended(Vec<u8>),
    Mode(DeviceMode),
}

/// A transport that doesn't talk to any device but remembers everything it was asked to send,
/// in order. Useful for tests and for hosts that want to inspect the output first.
#[derive(Debug, Default, Clone)]
pub struct RecordingTransport {
    sent: Vec<Sent>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> &[Sent] {
        &self.sent
    }

    /// Only the lighting messages, converted back to commands
    pub fn commands(&self) -> Vec<LightingCommand> {
        self.sent
            .iter()
            .filter_map(|sent| match sent {
                Sent::Short(bytes) => Some(LightingCommand::Short(*bytes)),
                Sent::Extended(bytes) => Some(LightingCommand::Extended(bytes.clone())),
                Sent::Mode(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.sent.clear();
    }
}

impl DeviceTransport for RecordingTransport {
    fn send_short(&mut self, bytes: [u8; 3]) -> Result<(), MidiError> {
        self.sent.push(Sent::Short(bytes));
        Ok(())
    }

    fn send_extended(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        self.sent.push(Sent::Extended(bytes.to_vec()));
        Ok(())
    }

    fn set_mode(&mut self, mode: DeviceMode) -> Result<(), MidiError> {
        self.sent.push(Sent::Mode(mode));
        Ok(())
    }
}
