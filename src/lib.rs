/*!
A 19-EDO microtonal instrument for the Novation Launchpad X.

Every pad of the 8x8 grid is given a pitch from an equal division of the octave (19 steps by
default), and every pad's idle color shows its scale degree, so the tuning's thirds, fourths
and fifths can be found at a glance. Pressing a pad lights every pad that plays the same pitch;
releasing it restores their idle colors.

# Playing

```no_run
use launchy_edo::{Config, InputDevice as _, Instrument, OutputDevice as _};

let config = Config::default();
let output = launchy_edo::launchpad_x::Output::guess_with_keyword(&config.device_keyword)?;
let input = launchy_edo::launchpad_x::Input::guess_polling(&config.device_keyword)?;

let mut instrument = Instrument::from_config(&config, output)?;
instrument.start()?;
input.drain();

for message in input.iter() {
    instrument.handle_message(&message)?;
}
# Ok::<(), launchy_edo::Error>(())
```

# Building blocks

- [`GridCoordinate`]: pad position and its device id
- [`PitchMap`]: which pad plays which pitch, and the host's input translation table
- [`DegreeColorPolicy`]: idle color per scale degree
- [`EquivalenceIndex`]: all pads sharing a pitch
- [`LedCommandEncoder`]: the device's lighting messages
- [`InputEventRouter`]: incoming pad messages to lighting updates

None of these touch a device. [`Instrument`] ties them to a [`DeviceTransport`]; use
[`RecordingTransport`] to run everything without hardware.
*/

pub mod util;

mod errors;
pub use errors::*;

mod grid;
pub use grid::*;

mod tuning;
pub use tuning::*;

mod pitch_map;
pub use pitch_map::*;

mod color;
pub use color::*;

mod color_policy;
pub use color_policy::*;

mod equivalence;
pub use equivalence::*;

mod led;
pub use led::*;

mod router;
pub use router::*;

mod transport;
pub use transport::*;

mod mock;
pub use mock::*;

mod midi_io;
pub use midi_io::*;

mod config;
pub use config::*;

mod instrument;
pub use instrument::*;

pub mod launchpad_x;

pub mod prelude {
    pub use crate::{Color, Config, DeviceTransport, GridCoordinate, Instrument, PitchMap};
    pub use crate::midi_io::{InputDevice, OutputDevice};
}

/// Identifier used for e.g. the midi port names etc.
const APPLICATION_NAME: &str = "Launchy EDO";
