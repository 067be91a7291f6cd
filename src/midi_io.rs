use crate::{ok_or_continue, MidiError};
use midir::{MidiInput, MidiInputConnection, MidiInputPort, MidiOutput, MidiOutputConnection};

fn guess_port<T: midir::MidiIO>(midi_io: &T, keyword: &str) -> Option<T::Port> {
    for port in midi_io.ports() {
        let name = ok_or_continue!(midi_io.port_name(&port));

        if name.contains(keyword) {
            log::debug!("using MIDI port {:?}", name);
            return Some(port);
        }
    }

    None
}

pub trait OutputDevice
where
    Self: Sized,
{
    const MIDI_CONNECTION_NAME: &'static str;
    const MIDI_DEVICE_KEYWORD: &'static str;

    /// Initiate from an existing midir connection.
    fn from_connection(connection: MidiOutputConnection) -> Result<Self, MidiError>;

    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError>;

    /// Connect to the first output port whose name contains [`Self::MIDI_DEVICE_KEYWORD`].
    fn guess() -> Result<Self, MidiError> {
        Self::guess_with_keyword(Self::MIDI_DEVICE_KEYWORD)
    }

    /// Connect to the first output port whose name contains `keyword`.
    fn guess_with_keyword(keyword: &str) -> Result<Self, MidiError> {
        let midi_output = MidiOutput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_output, keyword).ok_or_else(|| MidiError::NoPortFound {
            keyword: keyword.to_owned(),
        })?;

        let connection = midi_output.connect(&port, Self::MIDI_CONNECTION_NAME)?;

        Self::from_connection(connection)
    }
}

pub struct InputDeviceHandler {
    #[allow(dead_code)]
    connection: MidiInputConnection<()>,
}

pub struct InputDeviceHandlerPolling<Message> {
    #[allow(dead_code)]
    connection: MidiInputConnection<()>,
    receiver: std::sync::mpsc::Receiver<Message>,
}

impl<Message> InputDeviceHandlerPolling<Message> {
    /// Wait for a message to arrive, and return that. `None` once the connection is gone.
    pub fn recv(&self) -> Option<Message> {
        self.receiver.recv().ok()
    }

    /// Receives a single message. If no message arrives within the timespan specified by `timeout`,
    /// or the connection is gone, `None` is returned.
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<Message> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Returns an iterator over all arriving messages. The iterator will only return when the
    /// MIDI connection has been dropped.
    pub fn iter(&self) -> impl Iterator<Item = Message> + '_ {
        self.receiver.iter()
    }

    /// Returns an iterator over the currently pending messages.
    pub fn iter_pending(&self) -> impl Iterator<Item = Message> + '_ {
        self.receiver.try_iter()
    }

    /// Discard pending messages. The Launchpad queues up presses made while nothing was
    /// connected and releases them all on connect; call this right after connecting to skip them.
    ///
    /// Returns the number of messages that were discarded.
    pub fn drain(&self) -> usize {
        self.iter_pending().count()
    }
}

pub trait InputDevice: 'static {
    const MIDI_CONNECTION_NAME: &'static str;
    const MIDI_DEVICE_KEYWORD: &'static str;
    type Message;

    fn decode_message(timestamp: u64, data: &[u8]) -> Self::Message;

    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn from_port<F>(
        midi_input: MidiInput,
        port: &MidiInputPort,
        mut user_callback: F,
    ) -> Result<InputDeviceHandler, MidiError>
    where
        F: FnMut(Self::Message) + Send + 'static,
    {
        let midir_callback = move |timestamp: u64, data: &[u8], _: &mut _| {
            let msg = Self::decode_message(timestamp, data);
            (user_callback)(msg);
        };

        let connection = midi_input.connect(port, Self::MIDI_CONNECTION_NAME, midir_callback, ())?;

        Ok(InputDeviceHandler { connection })
    }

    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn from_port_polling(
        midi_input: MidiInput,
        port: &MidiInputPort,
    ) -> Result<InputDeviceHandlerPolling<Self::Message>, MidiError>
    where
        Self::Message: Send + 'static,
    {
        let (sender, receiver) = std::sync::mpsc::channel();
        let midir_callback = move |timestamp: u64, data: &[u8], _: &mut _| {
            let msg = Self::decode_message(timestamp, data);
            // Only fails when the polling handler was taken apart, nobody is listening then
            let _ = sender.send(msg);
        };

        let connection = midi_input.connect(port, Self::MIDI_CONNECTION_NAME, midir_callback, ())?;

        Ok(InputDeviceHandlerPolling {
            connection,
            receiver,
        })
    }

    /// Search the midi devices and choose the first one whose name contains `keyword`.
    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn guess<F>(keyword: &str, user_callback: F) -> Result<InputDeviceHandler, MidiError>
    where
        F: FnMut(Self::Message) + Send + 'static,
    {
        let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_input, keyword).ok_or_else(|| MidiError::NoPortFound {
            keyword: keyword.to_owned(),
        })?;

        Self::from_port(midi_input, &port, user_callback)
    }

    /// Search the midi devices and choose the first one whose name contains `keyword`.
    #[must_use = "If not saved, the connection will be immediately dropped"]
    fn guess_polling(
        keyword: &str,
    ) -> Result<InputDeviceHandlerPolling<Self::Message>, MidiError>
    where
        Self::Message: Send + 'static,
    {
        let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;

        let port = guess_port(&midi_input, keyword).ok_or_else(|| MidiError::NoPortFound {
            keyword: keyword.to_owned(),
        })?;

        Self::from_port_polling(midi_input, &port)
    }
}
