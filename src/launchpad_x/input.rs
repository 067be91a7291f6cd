use crate::DeviceMode;

/// A Launchpad X input message
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub enum Message {
    /// A channel voice message, e.g. a pad press or a control button
    Channel { status: u8, data1: u8, data2: u8 },
    /// The device confirmed a mode switch
    ModeChanged(DeviceMode),
    /// Anything else, like replies to inquiries or clock messages
    Other(Vec<u8>),
}

/// The Launchpad X input connection creator.
pub struct Input;

impl crate::InputDevice for Input {
    const MIDI_DEVICE_KEYWORD: &'static str = "LPX MIDI";
    const MIDI_CONNECTION_NAME: &'static str = "Launchy EDO Input";
    type Message = Message;

    fn decode_message(_timestamp: u64, data: &[u8]) -> Message {
        if let Some(mode) = DeviceMode::from_message(data) {
            log::info!("device is in {:?} mode", mode);
            return Message::ModeChanged(mode);
        }

        match *data {
            [status, data1, data2] if status & 0x80 != 0 && status < 0xF0 => Message::Channel {
                status,
                data1,
                data2,
            },
            _ => Message::Other(data.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputDevice;

    #[test]
    fn decodes_pad_and_button_messages() {
        assert_eq!(
            Input::decode_message(0, &[0x90, 11, 100]),
            Message::Channel {
                status: 0x90,
                data1: 11,
                data2: 100
            }
        );
        assert_eq!(
            Input::decode_message(0, &[0xB0, 95, 127]),
            Message::Channel {
                status: 0xB0,
                data1: 95,
                data2: 127
            }
        );
    }

    #[test]
    fn decodes_mode_reply() {
        assert_eq!(
            Input::decode_message(0, &DeviceMode::Programmer.message()),
            Message::ModeChanged(DeviceMode::Programmer)
        );
    }

    #[test]
    fn keeps_everything_else() {
        assert_eq!(Input::decode_message(0, &[0xF8]), Message::Other(vec![0xF8]));
        assert_eq!(
            Input::decode_message(0, &[0xD0, 64]),
            Message::Other(vec![0xD0, 64])
        );
    }
}
