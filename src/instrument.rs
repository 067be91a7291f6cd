use crate::{
    Color, Config, DegreeColorPolicy, DeviceMode, DeviceTransport, InputEventRouter,
    Error, InputTranslationTable, LedCommandEncoder, PitchMap, Result,
};

/// The playable instrument: a pitch map, its idle colors and the device they're shown on.
///
/// ```
/// # use launchy_edo::{Config, Instrument, RecordingTransport};
/// let mut instrument = Instrument::from_config(&Config::default(), RecordingTransport::new())?;
/// instrument.start()?;
/// instrument.handle_midi(0x90, 11, 100)?;
/// instrument.stop()?;
/// # Ok::<(), launchy_edo::Error>(())
/// ```
pub struct Instrument<T: DeviceTransport> {
    pitch_map: PitchMap,
    policy: DegreeColorPolicy,
    highlight: Color,
    transport: T,
}

impl<T: DeviceTransport> Instrument<T> {
    /// Fails with `InvalidTuning` if the pitch map and color policy were built for different
    /// tunings, and with `InvalidColor` for an out-of-range highlight.
    pub fn new(
        pitch_map: PitchMap,
        policy: DegreeColorPolicy,
        highlight: Color,
        transport: T,
    ) -> Result<Self> {
        if pitch_map.tuning() != policy.tuning() {
            return Err(Error::InvalidTuning(format!(
                "pitch map is for {:?} but the color policy is for {:?}",
                pitch_map.tuning(),
                policy.tuning()
            )));
        }
        highlight.validate()?;

        Ok(Self {
            pitch_map,
            policy,
            highlight,
            transport,
        })
    }

    pub fn from_config(config: &Config, transport: T) -> Result<Self> {
        Self::new(
            config.pitch_map()?,
            config.color_policy()?,
            config.highlight()?,
            transport,
        )
    }

    /// Take over the device and paint every pad in its idle color.
    pub fn start(&mut self) -> Result<()> {
        self.transport.set_mode(DeviceMode::Programmer)?;

        let commands = LedCommandEncoder.reset_all(&self.pitch_map, &self.policy)?;
        for command in &commands {
            self.transport.send_command(command)?;
        }
        Ok(())
    }

    /// Handle one incoming message from the pads and send the resulting lighting updates, in
    /// the order they were produced.
    ///
    /// Messages that can't be handled are logged and skipped. Only transport failures are
    /// returned.
    pub fn handle_midi(&mut self, status: u8, data1: u8, data2: u8) -> Result<()> {
        let commands = InputEventRouter::new(&self.pitch_map, &self.policy, self.highlight)
            .route(status, data1, data2);

        for command in &commands {
            self.transport.send_command(command)?;
        }
        Ok(())
    }

    /// Feed a decoded Launchpad X message. Non channel messages are ignored.
    pub fn handle_message(&mut self, message: &crate::launchpad_x::Message) -> Result<()> {
        match *message {
            crate::launchpad_x::Message::Channel {
                status,
                data1,
                data2,
            } => self.handle_midi(status, data1, data2),
            _ => Ok(()),
        }
    }

    /// Give the device back to its own layouts.
    pub fn stop(&mut self) -> Result<()> {
        self.transport.set_mode(DeviceMode::Live)?;
        log::info!("instrument stopped");
        Ok(())
    }

    pub fn input_translation_table(&self) -> InputTranslationTable {
        self.pitch_map.input_translation_table()
    }

    pub fn pitch_map(&self) -> &PitchMap {
        &self.pitch_map
    }

    pub fn color_policy(&self) -> &DegreeColorPolicy {
        &self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
