use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    Color, DegreeColorPolicy, Error, PaletteColor, PitchMap, Result, ThemeEntry, Tuning,
    DEFAULT_FINGERS_PER_ROW,
};

/// Everything needed to set up the instrument. Missing JSON fields take their default.
///
/// ```
/// # use launchy_edo::Config;
/// let config = Config::from_json_str(r#"{ "root_key": 62, "log_level": "info" }"#)?;
/// assert_eq!(config.divisions, 19);
/// assert_eq!(config.pitch_map()?.low_pitch(), 43);
/// # Ok::<(), launchy_edo::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub divisions: i32,
    pub root_key: i32,
    pub fingers_per_row: i32,
    /// Color of pads while their pitch is held
    pub highlight: Color,
    /// Idle color per scale degree. `None` uses the built-in 19-EDO theme.
    pub theme: Option<Vec<ThemeEntry>>,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Part of the MIDI port name to connect to
    pub device_keyword: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            divisions: 19,
            root_key: 60,
            fingers_per_row: DEFAULT_FINGERS_PER_ROW,
            highlight: Color::Palette(PaletteColor::GREEN),
            theme: None,
            log_level: String::from("debug"),
            device_keyword: String::from("LPX MIDI"),
        }
    }
}

impl Config {
    pub fn read(filepath: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(filepath)?;
        let reader = BufReader::new(file);

        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<()> {
        serde_json::to_writer_pretty(File::create(filepath)?, self)?;
        Ok(())
    }

    pub fn tuning(&self) -> Result<Tuning> {
        Tuning::new(self.divisions, self.root_key)
    }

    pub fn pitch_map(&self) -> Result<PitchMap> {
        PitchMap::with_tuning(self.tuning()?, self.fingers_per_row)
    }

    pub fn color_policy(&self) -> Result<DegreeColorPolicy> {
        let tuning = self.tuning()?;
        match &self.theme {
            Some(entries) => DegreeColorPolicy::from_entries(tuning, entries),
            None if tuning.divisions() == 19 => DegreeColorPolicy::edo_19(tuning),
            None => Err(Error::InvalidTuning(format!(
                "no built-in theme for {} divisions, configure one",
                tuning.divisions()
            ))),
        }
    }

    /// The highlight color, checked so that a bad value fails at startup
    pub fn highlight(&self) -> Result<Color> {
        self.highlight.validate()?;
        Ok(self.highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_the_default() {
        assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
    }

    #[test]
    fn default_builds_nineteen_edo() {
        let config = Config::default();
        let map = config.pitch_map().unwrap();
        assert_eq!((map.divisions(), map.root_key(), map.low_pitch()), (19, 60, 41));
        assert!(config.color_policy().is_ok());
        assert_eq!(config.highlight().unwrap(), Color::Palette(PaletteColor::GREEN));
    }

    #[test]
    fn other_tunings_need_a_theme() {
        let config = Config::from_json_str(r#"{ "divisions": 31, "root_key": 64 }"#).unwrap();
        assert!(config.pitch_map().is_ok());
        assert!(matches!(config.color_policy(), Err(Error::InvalidTuning(_))));

        let themed = Config::from_json_str(
            r#"{
                "divisions": 31,
                "root_key": 64,
                "theme": [
                    { "degree": 1, "color": { "palette": 5 } },
                    { "degree": 19, "color": { "rgb": { "color": { "r": 0, "g": 0, "b": 127 }, "brightness": 0.5 } } }
                ]
            }"#,
        )
        .unwrap();
        let policy = themed.color_policy().unwrap();
        assert_eq!(policy.color_for(64), Color::Palette(PaletteColor::RED));
        assert_eq!(policy.color_for(64 + 18).scaled_rgb(), Some((0, 0, 64)));
    }

    #[test]
    fn bad_values_fail_at_setup() {
        let config = Config::from_json_str(r#"{ "fingers_per_row": 0 }"#).unwrap();
        assert!(matches!(config.pitch_map(), Err(Error::InvalidTuning(_))));

        let config = Config::from_json_str(r#"{ "highlight": { "palette": 130 } }"#).unwrap();
        assert!(matches!(config.highlight(), Err(Error::InvalidColor(_))));

        let config = Config::from_json_str(r#"{ "divisions": 2000000000, "theme": [] }"#).unwrap();
        assert!(matches!(config.color_policy(), Err(Error::InvalidTuning(_))));

        assert!(matches!(
            Config::from_json_str("{ not json"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn survives_a_file_round_trip() {
        let path = std::env::temp_dir().join("launchy-edo-config-test.json");
        let mut config = Config::default();
        config.fingers_per_row = 5;
        config.write(&path).unwrap();
        assert_eq!(Config::read(&path).unwrap(), config);
        let _ = std::fs::remove_file(&path);
    }
}
