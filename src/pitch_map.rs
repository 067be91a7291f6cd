use crate::util::Array2d;
use crate::{Error, GridCoordinate, Result, Tuning, GRID_SIZE, MAX_PITCH};

/// Number of slots in the device's note input translation table, one per possible id.
pub const TRANSLATION_TABLE_SIZE: usize = 128;

/// Marker the host expects for ids that must not produce a note.
pub const UNMAPPED: i32 = -1;

/// Default linearization stride: every pad in a row is one step apart and rows continue where
/// the previous one ended.
pub const DEFAULT_FINGERS_PER_ROW: i32 = 8;

/// The fixed assignment of pitches to pads.
///
/// Pad (1, 1) gets `root_key - divisions`, i.e. one octave below the root. Every step to the
/// right adds one division, every row up adds `fingers_per_row` divisions:
///
/// `pitch(row, column) = low_pitch + fingers_per_row * (row - 1) + (column - 1)`
///
/// With a stride smaller than 8 rows overlap, so one pitch can sit on several pads. Those pads
/// are reported together by [`PitchMap::coordinates_for_pitch`].
///
/// ```
/// # use launchy_edo::{GridCoordinate, PitchMap};
/// let map = PitchMap::build(19, 60, 8)?;
/// assert_eq!(map.pitch_of(GridCoordinate::from_grid(1, 1)?), 41);
/// assert_eq!(map.pitch_of(GridCoordinate::from_grid(2, 1)?), 49);
/// # Ok::<(), launchy_edo::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchMap {
    tuning: Tuning,
    fingers_per_row: i32,
    low_pitch: i32,
    pitches: Array2d<i32>,
    by_device_id: Vec<Option<i32>>,
}

impl PitchMap {
    pub fn build(divisions: i32, root_key: i32, fingers_per_row: i32) -> Result<Self> {
        let tuning = Tuning::new(divisions, root_key)?;
        Self::with_tuning(tuning, fingers_per_row)
    }

    pub fn with_tuning(tuning: Tuning, fingers_per_row: i32) -> Result<Self> {
        if fingers_per_row <= 0 {
            return Err(Error::InvalidTuning(format!(
                "fingers per row must be positive, got {}",
                fingers_per_row
            )));
        }

        let low_pitch = tuning.root_key() - tuning.divisions();
        let size = GRID_SIZE as usize;
        let mut pitches = Array2d::new(size, size);
        let mut by_device_id = vec![None; TRANSLATION_TABLE_SIZE];

        for pad in GridCoordinate::all() {
            let pitch = low_pitch
                + fingers_per_row * (pad.row() as i32 - 1)
                + (pad.column() as i32 - 1);
            if !(0..=MAX_PITCH).contains(&pitch) {
                return Err(Error::InvalidTuning(format!(
                    "pad {} would play pitch {}, outside 0..={}",
                    pad.device_id(),
                    pitch,
                    MAX_PITCH
                )));
            }

            pitches.set(pad.column() as usize - 1, pad.row() as usize - 1, pitch);
            by_device_id[pad.device_id() as usize] = Some(pitch);
        }

        log::debug!(
            "built pitch map: {} divisions, root {}, stride {}, pitches {}..={}",
            tuning.divisions(),
            tuning.root_key(),
            fingers_per_row,
            low_pitch,
            pitches.get(size - 1, size - 1),
        );

        Ok(Self {
            tuning,
            fingers_per_row,
            low_pitch,
            pitches,
            by_device_id,
        })
    }

    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    pub fn divisions(&self) -> i32 {
        self.tuning.divisions()
    }

    pub fn root_key(&self) -> i32 {
        self.tuning.root_key()
    }

    pub fn fingers_per_row(&self) -> i32 {
        self.fingers_per_row
    }

    /// The pitch of pad (1, 1)
    pub fn low_pitch(&self) -> i32 {
        self.low_pitch
    }

    pub fn pitch_of(&self, pad: GridCoordinate) -> i32 {
        self.pitches
            .get(pad.column() as usize - 1, pad.row() as usize - 1)
    }

    /// The pitch played by the pad with the given device id, if that id is a grid pad.
    pub fn pitch_for_device_id(&self, device_id: u8) -> Option<i32> {
        self.by_device_id.get(device_id as usize).copied().flatten()
    }

    /// Every pad that plays `pitch`, in row-major order. Empty when no pad plays it.
    pub fn coordinates_for_pitch(&self, pitch: i32) -> Vec<GridCoordinate> {
        GridCoordinate::all()
            .filter(|&pad| self.pitch_of(pad) == pitch)
            .collect()
    }

    /// Scale degree of `pitch` within this map's tuning.
    pub fn degree(&self, pitch: i32) -> i32 {
        self.tuning.degree(pitch)
    }

    /// The table a host installs so that raw pad ids arrive as tuned pitches.
    pub fn input_translation_table(&self) -> InputTranslationTable {
        let mut table = [UNMAPPED; TRANSLATION_TABLE_SIZE];
        for (slot, pitch) in table.iter_mut().zip(&self.by_device_id) {
            if let Some(pitch) = pitch {
                *slot = *pitch;
            }
        }
        InputTranslationTable { table }
    }
}

/// Device id to pitch lookup in the shape hosts use for note input translation: 128 slots, with
/// [`UNMAPPED`] marking ids that should be filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTranslationTable {
    table: [i32; TRANSLATION_TABLE_SIZE],
}

impl InputTranslationTable {
    pub fn get(&self, device_id: u8) -> Option<i32> {
        match self.table.get(device_id as usize) {
            Some(&UNMAPPED) | None => None,
            Some(&pitch) => Some(pitch),
        }
    }

    pub fn as_array(&self) -> &[i32; TRANSLATION_TABLE_SIZE] {
        &self.table
    }

    pub fn mapped_count(&self) -> usize {
        self.table.iter().filter(|&&pitch| pitch != UNMAPPED).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(row: u8, column: u8) -> GridCoordinate {
        GridCoordinate::from_grid(row, column).unwrap()
    }

    #[test]
    fn nineteen_edo_layout() {
        let map = PitchMap::build(19, 60, 8).unwrap();
        assert_eq!(map.low_pitch(), 41);
        assert_eq!(map.pitch_of(pad(1, 1)), 41);
        assert_eq!(map.pitch_of(pad(1, 2)), 42);
        assert_eq!(map.pitch_of(pad(2, 1)), 49);
        assert_eq!(map.pitch_of(pad(8, 8)), 41 + 7 * 8 + 7);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(matches!(
            PitchMap::build(0, 60, 8),
            Err(Error::InvalidTuning(_))
        ));
        assert!(matches!(
            PitchMap::build(19, 60, 0),
            Err(Error::InvalidTuning(_))
        ));
        assert!(matches!(
            PitchMap::build(19, 60, -5),
            Err(Error::InvalidTuning(_))
        ));
    }

    #[test]
    fn rejects_pitches_outside_midi_range() {
        assert!(matches!(
            PitchMap::build(19, 10, 8),
            Err(Error::InvalidTuning(_))
        ));
        assert!(matches!(
            PitchMap::build(19, 120, 8),
            Err(Error::InvalidTuning(_))
        ));
    }

    #[test]
    fn every_pad_is_among_its_pitch_coordinates() {
        for stride in [8, 5, 3] {
            let map = PitchMap::build(19, 60, stride).unwrap();
            for c in GridCoordinate::all() {
                assert!(map.coordinates_for_pitch(map.pitch_of(c)).contains(&c));
            }
        }
    }

    #[test]
    fn full_stride_is_injective() {
        let map = PitchMap::build(19, 60, 8).unwrap();
        for c in GridCoordinate::all() {
            assert_eq!(map.coordinates_for_pitch(map.pitch_of(c)), vec![c]);
        }
    }

    #[test]
    fn folded_stride_reports_duplicates_in_row_major_order() {
        let map = PitchMap::build(19, 60, 5).unwrap();
        // (1, 6) and (2, 1) are both low_pitch + 5
        assert_eq!(
            map.coordinates_for_pitch(46),
            vec![pad(1, 6), pad(2, 1)]
        );
    }

    #[test]
    fn unknown_pitch_has_no_pads() {
        let map = PitchMap::build(19, 60, 8).unwrap();
        assert!(map.coordinates_for_pitch(40).is_empty());
        assert!(map.coordinates_for_pitch(127).is_empty());
    }

    #[test]
    fn translation_table_marks_off_grid_ids() {
        let map = PitchMap::build(19, 60, 8).unwrap();
        let table = map.input_translation_table();

        assert_eq!(table.as_array().len(), 128);
        assert_eq!(table.mapped_count(), 64);
        assert_eq!(table.get(11), Some(41));
        assert_eq!(table.get(21), Some(49));
        assert_eq!(table.get(88), Some(104));
        for id in [0, 10, 19, 89, 91, 99, 127] {
            assert_eq!(table.get(id), None);
            assert_eq!(table.as_array()[id as usize], UNMAPPED);
        }
    }

    #[test]
    fn device_id_lookup_matches_grid_lookup() {
        let map = PitchMap::build(19, 60, 8).unwrap();
        for c in GridCoordinate::all() {
            assert_eq!(map.pitch_for_device_id(c.device_id()), Some(map.pitch_of(c)));
        }
        assert_eq!(map.pitch_for_device_id(99), None);
        assert_eq!(map.pitch_for_device_id(200), None);
    }
}
