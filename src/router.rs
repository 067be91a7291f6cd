use crate::{
    is_button_id, Color, DegreeColorPolicy, EquivalenceIndex, Error, GridCoordinate,
    LedCommandEncoder, LightingCommand, LightingMode, PitchMap, Result,
};

/// A decoded channel voice message from the pad grid. Channels are 1..=16.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum ChannelMessage {
    NoteOn { channel: u8, note: u8, velocity: u8 },
    NoteOff { channel: u8, note: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    PolyPressure { channel: u8, note: u8, pressure: u8 },
}

impl ChannelMessage {
    /// Sort a raw `(status, data1, data2)` triple into one of the handled categories.
    pub fn classify(status: u8, data1: u8, data2: u8) -> Result<Self> {
        let channel = (status & 0x0F) + 1;
        match status & 0xF0 {
            0x80 => Ok(ChannelMessage::NoteOff {
                channel,
                note: data1,
                velocity: data2,
            }),
            0x90 => Ok(ChannelMessage::NoteOn {
                channel,
                note: data1,
                velocity: data2,
            }),
            0xA0 => Ok(ChannelMessage::PolyPressure {
                channel,
                note: data1,
                pressure: data2,
            }),
            0xB0 => Ok(ChannelMessage::ControlChange {
                channel,
                controller: data1,
                value: data2,
            }),
            _ => Err(Error::UnrecognizedMessage {
                status,
                data1,
                data2,
            }),
        }
    }
}

/// Turns incoming pad messages into lighting updates.
///
/// A press lights every pad sharing the pressed pad's pitch in the highlight color, a release
/// (note-off, or note-on with velocity 0) puts those pads back to their idle color. The router
/// keeps no state between messages.
pub struct InputEventRouter<'a> {
    pitch_map: &'a PitchMap,
    policy: &'a DegreeColorPolicy,
    highlight: Color,
    encoder: LedCommandEncoder,
}

impl<'a> InputEventRouter<'a> {
    pub fn new(pitch_map: &'a PitchMap, policy: &'a DegreeColorPolicy, highlight: Color) -> Self {
        Self {
            pitch_map,
            policy,
            highlight,
            encoder: LedCommandEncoder,
        }
    }

    /// Handle one raw message. Anything that can't be handled is logged and produces no
    /// commands; the next message is processed normally.
    pub fn route(&self, status: u8, data1: u8, data2: u8) -> Vec<LightingCommand> {
        match ChannelMessage::classify(status, data1, data2) {
            Ok(message) => self.dispatch(message),
            Err(e) => {
                log::warn!("dropping message: {}", e);
                Vec::new()
            }
        }
    }

    pub fn dispatch(&self, message: ChannelMessage) -> Vec<LightingCommand> {
        match message {
            ChannelMessage::NoteOn { note, velocity, .. } if is_button_id(note) => {
                self.button(note, velocity);
                Vec::new()
            }
            ChannelMessage::NoteOn { note, velocity: 0, .. } => self.release(note),
            ChannelMessage::NoteOn { note, velocity, .. } => self.press(note, velocity),
            ChannelMessage::NoteOff { note, .. } => self.release(note),
            ChannelMessage::ControlChange {
                controller, value, ..
            } => {
                if is_button_id(controller) {
                    self.button(controller, value);
                } else {
                    log::debug!("ignoring control change {} : {}", controller, value);
                }
                Vec::new()
            }
            // Reserved for expressive mapping
            ChannelMessage::PolyPressure { .. } => Vec::new(),
        }
    }

    fn press(&self, note: u8, velocity: u8) -> Vec<LightingCommand> {
        log::debug!("note on -> {} : {}", note, velocity);

        let mode = LightingMode::for_color(&self.highlight);
        self.equivalents(note)
            .into_iter()
            .map(|pad| self.encoder.encode_clamped(pad, self.highlight, mode))
            .collect()
    }

    fn release(&self, note: u8) -> Vec<LightingCommand> {
        log::debug!("note off -> {}", note);

        self.equivalents(note)
            .into_iter()
            .map(|pad| {
                let color = self.policy.color_for(self.pitch_map.pitch_of(pad));
                self.encoder
                    .encode_clamped(pad, color, LightingMode::for_color(&color))
            })
            .collect()
    }

    fn button(&self, id: u8, value: u8) {
        log::info!("button {} : {} (forwarded)", id, value);
    }

    fn equivalents(&self, note: u8) -> Vec<GridCoordinate> {
        let pads = EquivalenceIndex::new(self.pitch_map).equivalent_coordinates(note);
        if pads.is_empty() {
            log::debug!("id {} has no pitch, ignoring", note);
        }
        pads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PaletteColor, Tuning};

    fn fixture(stride: i32) -> (PitchMap, DegreeColorPolicy) {
        let map = PitchMap::build(19, 60, stride).unwrap();
        let policy = DegreeColorPolicy::edo_19(Tuning::EDO_19).unwrap();
        (map, policy)
    }

    fn idle_command(map: &PitchMap, policy: &DegreeColorPolicy, id: u8) -> LightingCommand {
        let pad = GridCoordinate::from_grid(id / 10, id % 10).unwrap();
        let color = policy.color_for(map.pitch_of(pad));
        LedCommandEncoder
            .encode(pad, color, LightingMode::for_color(&color))
            .unwrap()
    }

    #[test]
    fn classifies_status_ranges() {
        assert_eq!(
            ChannelMessage::classify(0x93, 11, 100).unwrap(),
            ChannelMessage::NoteOn {
                channel: 4,
                note: 11,
                velocity: 100
            }
        );
        assert!(matches!(
            ChannelMessage::classify(0x8F, 11, 0),
            Ok(ChannelMessage::NoteOff { channel: 16, .. })
        ));
        assert!(matches!(
            ChannelMessage::classify(0xB0, 91, 127),
            Ok(ChannelMessage::ControlChange { .. })
        ));
        assert!(matches!(
            ChannelMessage::classify(0xA0, 11, 64),
            Ok(ChannelMessage::PolyPressure { .. })
        ));
        for status in [0xC0, 0xD0, 0xE0, 0xF8, 0x00] {
            assert!(matches!(
                ChannelMessage::classify(status, 0, 0),
                Err(Error::UnrecognizedMessage { .. })
            ));
        }
    }

    #[test]
    fn press_highlights_the_pad() {
        let (map, policy) = fixture(8);
        let router = InputEventRouter::new(&map, &policy, PaletteColor::GREEN.into());
        let commands = router.route(0x90, 11, 100);
        assert_eq!(commands, vec![LightingCommand::Short([0x90, 11, 21])]);
    }

    #[test]
    fn zero_velocity_note_on_is_a_release() {
        let (map, policy) = fixture(8);
        let router = InputEventRouter::new(&map, &policy, PaletteColor::GREEN.into());

        let via_note_on = router.route(0x90, 11, 0);
        let via_note_off = router.route(0x80, 11, 64);
        assert_eq!(via_note_on, via_note_off);
        assert_eq!(via_note_on, vec![idle_command(&map, &policy, 11)]);
    }

    #[test]
    fn folded_layout_lights_all_duplicates() {
        let (map, policy) = fixture(5);
        let router = InputEventRouter::new(&map, &policy, PaletteColor::GREEN.into());

        let pressed: Vec<u8> = router.route(0x90, 21, 90).iter().map(|command| command.pad().unwrap()).collect();
        assert_eq!(pressed, vec![16, 21]);

        let released = router.route(0x80, 16, 0);
        assert_eq!(
            released,
            vec![idle_command(&map, &policy, 16), idle_command(&map, &policy, 21)]
        );
    }

    #[test]
    fn inert_input_emits_nothing() {
        let (map, policy) = fixture(8);
        let router = InputEventRouter::new(&map, &policy, PaletteColor::GREEN.into());

        // Off-grid note
        assert!(router.route(0x90, 5, 100).is_empty());
        // Control buttons, as note and as control change
        assert!(router.route(0x90, 19, 127).is_empty());
        assert!(router.route(0xB0, 95, 127).is_empty());
        assert!(router.route(0xB0, 1, 64).is_empty());
        // Aftertouch
        assert!(router.route(0xA0, 11, 80).is_empty());
        // Unknown status, followed by a normal message that still works
        assert!(router.route(0xE0, 0, 64).is_empty());
        assert_eq!(router.route(0x90, 12, 1).len(), 1);
    }
}
