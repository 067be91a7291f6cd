/*!
# Launchpad X low-level API

The Launchpad X has an 8x8 grid of velocity sensitive RGB pads, a column of eight control
buttons on the right and eight more across the top. In programmer mode the grid pads report
note messages with ids `11..=88` (row * 10 + column, counting from the bottom left) and the
control buttons report control changes with ids `19, 29, ..., 89` and `91..=98`.
*/

mod input;
pub use input::*;

mod output;
pub use output::*;
