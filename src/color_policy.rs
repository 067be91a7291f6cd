use serde::{Deserialize, Serialize};

use crate::{Color, Error, Result, RgbColor, Tuning};

/// One row of a degree to color theme.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub degree: i32,
    pub color: Color,
}

macro_rules! rgb {
    ( $r:expr, $g:expr, $b:expr, $brightness:expr ) => {
        Color::Rgb {
            color: RgbColor {
                r: $r,
                g: $g,
                b: $b,
            },
            brightness: $brightness,
        }
    };
}

/// Dimming applied to passing degrees
const TINT: f32 = 0.1;

/// Idle colors for 19-EDO. Steps are counted from the root (degree 1):
///
/// - 1: root, red
/// - 6 and 7: minor and major third (5 and 6 steps), blue and green
/// - 9: fourth (8 steps), orange
/// - 12: fifth (11 steps), yellow
/// - 2 and 19: the neighbours of the octave, magenta
/// - 5, 8, 11, 13 and 18: passing tones next to the thirds, fourth, fifth and octave, dim tints
///   of those
///
/// All other degrees stay dark.
pub const EDO_19_THEME: [ThemeEntry; 12] = [
    ThemeEntry { degree: 1, color: rgb!(127, 0, 0, 1.0) },
    ThemeEntry { degree: 2, color: rgb!(127, 0, 103, 1.0) },
    ThemeEntry { degree: 5, color: rgb!(0, 60, 127, TINT) },
    ThemeEntry { degree: 6, color: rgb!(0, 60, 127, 1.0) },
    ThemeEntry { degree: 7, color: rgb!(0, 127, 20, 1.0) },
    ThemeEntry { degree: 8, color: rgb!(0, 127, 20, TINT) },
    ThemeEntry { degree: 9, color: rgb!(127, 50, 0, 1.0) },
    ThemeEntry { degree: 11, color: rgb!(127, 110, 0, TINT) },
    ThemeEntry { degree: 12, color: rgb!(127, 110, 0, 1.0) },
    ThemeEntry { degree: 13, color: rgb!(127, 110, 0, TINT) },
    ThemeEntry { degree: 18, color: rgb!(127, 0, 103, TINT) },
    ThemeEntry { degree: 19, color: rgb!(127, 0, 103, 1.0) },
];

/// Maps each scale degree of a tuning to the color its pads show while idle.
///
/// The mapping is a plain table, so themes for other tunings can be loaded from configuration
/// without touching the engine. Degrees missing from the table are [`Color::OFF`].
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeColorPolicy {
    tuning: Tuning,
    // Index 0 is degree 1
    colors: Vec<Color>,
}

impl DegreeColorPolicy {
    /// Build a policy from theme rows. Every color is checked here, so a broken theme fails at
    /// startup rather than during a performance.
    pub fn from_entries(tuning: Tuning, entries: &[ThemeEntry]) -> Result<Self> {
        let mut colors = vec![Color::OFF; tuning.divisions() as usize];

        for entry in entries {
            if !(1..=tuning.divisions()).contains(&entry.degree) {
                return Err(Error::InvalidTuning(format!(
                    "theme names degree {} but the tuning has {} divisions",
                    entry.degree,
                    tuning.divisions()
                )));
            }
            entry.color.validate()?;
            colors[entry.degree as usize - 1] = entry.color;
        }

        Ok(Self { tuning, colors })
    }

    /// The built-in 19-EDO theme for the given tuning.
    ///
    /// Fails with `InvalidTuning` if the tuning doesn't have 19 divisions.
    pub fn edo_19(tuning: Tuning) -> Result<Self> {
        if tuning.divisions() != 19 {
            return Err(Error::InvalidTuning(format!(
                "built-in theme is for 19 divisions, tuning has {}",
                tuning.divisions()
            )));
        }
        Self::from_entries(tuning, &EDO_19_THEME)
    }

    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    pub fn color_for_degree(&self, degree: i32) -> Color {
        match usize::try_from(degree - 1) {
            Ok(index) => self.colors.get(index).copied().unwrap_or(Color::OFF),
            Err(_) => Color::OFF,
        }
    }

    pub fn color_for(&self, pitch: i32) -> Color {
        self.color_for_degree(self.tuning.degree(pitch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_theme_is_valid() {
        let policy = DegreeColorPolicy::edo_19(Tuning::EDO_19).unwrap();
        assert_eq!(policy.color_for(60), rgb!(127, 0, 0, 1.0));
        assert_eq!(policy.color_for(60 + 11), rgb!(127, 110, 0, 1.0));
        assert_eq!(policy.color_for(60 + 2), Color::OFF);
        assert_eq!(policy.color_for(59).scaled_rgb(), Some((127, 0, 103)));
        assert_eq!(policy.color_for(58).scaled_rgb(), Some((13, 0, 10)));
    }

    #[test]
    fn structural_degrees_are_at_full_brightness() {
        let policy = DegreeColorPolicy::edo_19(Tuning::EDO_19).unwrap();
        for degree in [1, 2, 6, 7, 9, 12, 19] {
            match policy.color_for_degree(degree) {
                Color::Rgb { brightness, .. } => assert_eq!(brightness, 1.0, "degree {}", degree),
                other => panic!("degree {} has {:?}", degree, other),
            }
        }
        for degree in [5, 8, 11, 13, 18] {
            match policy.color_for_degree(degree) {
                Color::Rgb { brightness, .. } => assert_eq!(brightness, TINT, "degree {}", degree),
                other => panic!("degree {} has {:?}", degree, other),
            }
        }
    }

    #[test]
    fn color_follows_the_octave() {
        let policy = DegreeColorPolicy::edo_19(Tuning::EDO_19).unwrap();
        for pitch in 0..=108 {
            assert_eq!(policy.color_for(pitch), policy.color_for(pitch + 19));
        }
    }

    #[test]
    fn custom_theme_for_another_tuning() {
        let tuning = Tuning::new(12, 60).unwrap();
        let policy = DegreeColorPolicy::from_entries(
            tuning,
            &[ThemeEntry {
                degree: 8,
                color: Color::Palette(crate::PaletteColor::BLUE),
            }],
        )
        .unwrap();
        assert_eq!(policy.color_for(67), Color::Palette(crate::PaletteColor::BLUE));
        assert_eq!(policy.color_for(60), Color::OFF);
        assert!(DegreeColorPolicy::edo_19(tuning).is_err());
    }

    #[test]
    fn rejects_bad_theme_rows() {
        let tuning = Tuning::EDO_19;
        let out_of_range = ThemeEntry {
            degree: 20,
            color: Color::OFF,
        };
        assert!(matches!(
            DegreeColorPolicy::from_entries(tuning, &[out_of_range]),
            Err(Error::InvalidTuning(_))
        ));

        let too_bright = ThemeEntry {
            degree: 3,
            color: rgb!(127, 0, 0, 2.0),
        };
        assert!(matches!(
            DegreeColorPolicy::from_entries(tuning, &[too_bright]),
            Err(Error::InvalidColor(_))
        ));
    }
}
