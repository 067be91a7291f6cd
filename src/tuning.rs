use crate::{Error, Result};

/// Highest pitch the device and hosts understand.
pub const MAX_PITCH: i32 = 127;

/// An equal division of the octave anchored to an absolute root pitch.
///
/// The instrument ships with 19-EDO anchored to middle C, see [`Tuning::EDO_19`].
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Tuning {
    divisions: i32,
    root_key: i32,
}

impl Tuning {
    pub const EDO_19: Tuning = Tuning {
        divisions: 19,
        root_key: 60,
    };

    pub fn new(divisions: i32, root_key: i32) -> Result<Self> {
        if divisions <= 0 {
            return Err(Error::InvalidTuning(format!(
                "divisions must be positive, got {}",
                divisions
            )));
        }
        // The grid spans an octave below the root, which has to stay a MIDI pitch
        if divisions > MAX_PITCH {
            return Err(Error::InvalidTuning(format!(
                "divisions {} exceeds {}",
                divisions, MAX_PITCH
            )));
        }
        if !(0..=MAX_PITCH).contains(&root_key) {
            return Err(Error::InvalidTuning(format!(
                "root key {} is outside 0..={}",
                root_key, MAX_PITCH
            )));
        }
        Ok(Self {
            divisions,
            root_key,
        })
    }

    pub fn divisions(&self) -> i32 {
        self.divisions
    }

    pub fn root_key(&self) -> i32 {
        self.root_key
    }

    /// Position of `pitch` within its octave, in `1..=divisions`. The root key is degree 1.
    ///
    /// Stable under octave transposition and defined for pitches below the root too.
    pub fn degree(&self, pitch: i32) -> i32 {
        (pitch - self.root_key).rem_euclid(self.divisions) + 1
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::EDO_19
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_degree_one() {
        let tuning = Tuning::EDO_19;
        assert_eq!(tuning.degree(60), 1);
        assert_eq!(tuning.degree(61), 2);
        assert_eq!(tuning.degree(78), 19);
        assert_eq!(tuning.degree(79), 1);
        assert_eq!(tuning.degree(59), 19);
        assert_eq!(tuning.degree(41), 1);
    }

    #[test]
    fn degree_is_octave_invariant() {
        let tuning = Tuning::EDO_19;
        for pitch in -40..=127 {
            let degree = tuning.degree(pitch);
            assert!((1..=19).contains(&degree));
            assert_eq!(degree, tuning.degree(pitch + 19));
        }
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(Tuning::new(0, 60), Err(Error::InvalidTuning(_))));
        assert!(matches!(Tuning::new(-12, 60), Err(Error::InvalidTuning(_))));
        assert!(matches!(Tuning::new(19, 128), Err(Error::InvalidTuning(_))));
        assert!(matches!(Tuning::new(128, 60), Err(Error::InvalidTuning(_))));
        assert!(matches!(
            Tuning::new(2_000_000_000, 60),
            Err(Error::InvalidTuning(_))
        ));
        assert!(Tuning::new(31, 0).is_ok());
        assert!(Tuning::new(MAX_PITCH, 127).is_ok());
    }
}
