use crate::{GridCoordinate, PitchMap};

/// Finds every pad that sounds the same pitch as a given pad, so a press can light all of them.
#[derive(Debug, Copy, Clone)]
pub struct EquivalenceIndex<'a> {
    pitch_map: &'a PitchMap,
}

impl<'a> EquivalenceIndex<'a> {
    pub fn new(pitch_map: &'a PitchMap) -> Self {
        Self { pitch_map }
    }

    /// All pads playing the same pitch as `device_id`, including that pad itself, in row-major
    /// order.
    ///
    /// Ids without a pitch (control buttons, anything off the grid) give an empty list.
    pub fn equivalent_coordinates(&self, device_id: u8) -> Vec<GridCoordinate> {
        match self.pitch_map.pitch_for_device_id(device_id) {
            Some(pitch) => self.pitch_map.coordinates_for_pitch(pitch),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_is_its_own_equivalent() {
        let map = PitchMap::build(19, 60, 8).unwrap();
        let index = EquivalenceIndex::new(&map);
        let pad = GridCoordinate::from_grid(1, 1).unwrap();
        assert_eq!(index.equivalent_coordinates(11), vec![pad]);
    }

    #[test]
    fn folded_layout_finds_duplicates() {
        let map = PitchMap::build(19, 60, 5).unwrap();
        let index = EquivalenceIndex::new(&map);
        let ids: Vec<u8> = index
            .equivalent_coordinates(21)
            .iter()
            .map(GridCoordinate::device_id)
            .collect();
        assert_eq!(ids, vec![16, 21]);
    }

    #[test]
    fn unmapped_ids_are_ignored() {
        let map = PitchMap::build(19, 60, 8).unwrap();
        let index = EquivalenceIndex::new(&map);
        for id in [0, 9, 19, 91, 99, 127] {
            assert!(index.equivalent_coordinates(id).is_empty());
        }
    }
}
