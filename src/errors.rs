/// Failures of the MIDI transport underneath the instrument.
#[derive(Debug)]
pub enum MidiError {
    InputConnectError(midir::ConnectError<midir::MidiInput>),
    OutputConnectError(midir::ConnectError<midir::MidiOutput>),
    InitError(midir::InitError),
    PortInfoError(midir::PortInfoError),
    SendError(midir::SendError),
    NoPortFound {
        // The keyword that was searched for
        keyword: String,
    },
}

impl std::fmt::Display for MidiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputConnectError(_) => f.write_str("connecting to MIDI input port failed"),
            Self::OutputConnectError(_) => f.write_str("connecting to MIDI output port failed"),
            Self::InitError(_) => f.write_str("MIDI context initialization failed"),
            Self::PortInfoError(_) => f.write_str("MIDI port retrieval failed"),
            Self::SendError(_) => f.write_str("sending MIDI message failed"),
            Self::NoPortFound { keyword } => write!(f, "couldn't find a port for {:?}", keyword),
        }
    }
}

impl std::error::Error for MidiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputConnectError(e) => Some(e),
            Self::OutputConnectError(e) => Some(e),
            Self::InitError(e) => Some(e),
            Self::PortInfoError(e) => Some(e),
            Self::SendError(e) => Some(e),
            Self::NoPortFound { .. } => None,
        }
    }
}

impl From<midir::ConnectError<midir::MidiInput>> for MidiError {
    fn from(e: midir::ConnectError<midir::MidiInput>) -> Self {
        Self::InputConnectError(e)
    }
}

impl From<midir::ConnectError<midir::MidiOutput>> for MidiError {
    fn from(e: midir::ConnectError<midir::MidiOutput>) -> Self {
        Self::OutputConnectError(e)
    }
}

impl From<midir::InitError> for MidiError {
    fn from(e: midir::InitError) -> Self {
        Self::InitError(e)
    }
}

impl From<midir::PortInfoError> for MidiError {
    fn from(e: midir::PortInfoError) -> Self {
        Self::PortInfoError(e)
    }
}

impl From<midir::SendError> for MidiError {
    fn from(e: midir::SendError) -> Self {
        Self::SendError(e)
    }
}

/// Everything that can go wrong while building or running the instrument.
///
/// `InvalidTuning`, `InvalidCoordinate` and `InvalidColor` raised during setup are meant to abort
/// setup. At runtime the [`InputEventRouter`](crate::InputEventRouter) logs and drops
/// per-message errors instead of returning them.
#[derive(Debug)]
pub enum Error {
    /// Row, column or device id outside the 8x8 pad grid
    InvalidCoordinate { row: i32, column: i32 },
    /// Tuning parameters that cannot produce a pitch map
    InvalidTuning(String),
    /// A palette index, RGB channel or brightness outside the device's range
    InvalidColor(String),
    /// A status byte that is none of the known channel voice categories
    UnrecognizedMessage { status: u8, data1: u8, data2: u8 },
    /// The configuration file could not be read or parsed
    Config(String),
    Midi(MidiError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCoordinate { row, column } => {
                write!(f, "pad (row {}, column {}) is outside the 8x8 grid", row, column)
            }
            Self::InvalidTuning(reason) => write!(f, "invalid tuning: {}", reason),
            Self::InvalidColor(reason) => write!(f, "invalid color: {}", reason),
            Self::UnrecognizedMessage {
                status,
                data1,
                data2,
            } => write!(
                f,
                "unrecognized MIDI message {:02X} {:02X} {:02X}",
                status, data1, data2
            ),
            Self::Config(reason) => write!(f, "bad configuration: {}", reason),
            Self::Midi(_) => f.write_str("MIDI transport failure"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Midi(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MidiError> for Error {
    fn from(e: MidiError) -> Self {
        Self::Midi(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
