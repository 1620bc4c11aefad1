use serde::Serialize;
use std::collections::BTreeMap;

use crate::course::{FRONT_NINE, HOLE_COUNT, MAX_HOLE_STROKES};
use crate::error::OutingError;
use crate::model::score::format_to_par;

/// One team's card. Hole values are strokes, with 0 meaning "not yet entered".
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    pub team: String,
    pub holes: [i32; HOLE_COUNT],
    pub total: i32,
    pub to_par: i32,
}

impl ScoreRecord {
    /// Build a record. Negative values and values above
    /// [`MAX_HOLE_STROKES`] are stored as 0.
    #[must_use]
    pub fn new(team: &str, holes: [i32; HOLE_COUNT], total_par: i32) -> Self {
        let holes = holes.map(|h| if (0..=MAX_HOLE_STROKES).contains(&h) { h } else { 0 });
        let total = holes.iter().sum();
        Self {
            team: team.to_string(),
            holes,
            total,
            to_par: total - total_par,
        }
    }

    /// Strokes on a 0-based hole index, 0 when unplayed.
    #[must_use]
    pub fn hole(&self, idx: usize) -> i32 {
        self.holes.get(idx).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn to_par_display(&self) -> String {
        format_to_par(self.to_par)
    }

    #[must_use]
    pub fn front_nine(&self) -> i32 {
        self.holes[..FRONT_NINE].iter().sum()
    }

    #[must_use]
    pub fn back_nine(&self) -> i32 {
        self.holes[FRONT_NINE..].iter().sum()
    }

    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.holes.iter().filter(|&&h| h > 0).count()
    }
}

/// Closest-to-pin winners keyed by 1-based hole number. An empty name is unset.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ClosestToPin {
    winners: BTreeMap<u8, String>,
}

impl ClosestToPin {
    #[must_use]
    pub fn new(holes: &[u8]) -> Self {
        Self {
            winners: holes.iter().map(|&h| (h, String::new())).collect(),
        }
    }

    /// Rebuild from saved winners, keeping only holes that are still
    /// closest-to-pin holes.
    #[must_use]
    pub fn restore(holes: &[u8], saved: &BTreeMap<u8, String>) -> Self {
        let mut ctp = Self::new(holes);
        for (hole, player) in saved {
            if let Some(slot) = ctp.winners.get_mut(hole) {
                slot.clone_from(player);
            }
        }
        ctp
    }

    /// Assign a player to a hole; an empty or blank name clears it.
    ///
    /// # Errors
    /// Returns `InvalidClosestToPinHole` if the hole is not a contest hole.
    pub fn set(&mut self, hole: u8, player: &str) -> Result<(), OutingError> {
        let slot = self
            .winners
            .get_mut(&hole)
            .ok_or(OutingError::InvalidClosestToPinHole(hole))?;
        *slot = player.trim().to_string();
        Ok(())
    }

    #[must_use]
    pub fn get(&self, hole: u8) -> Option<&str> {
        self.winners
            .get(&hole)
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }

    /// Every contest hole in ascending order with its winner, if any.
    pub fn entries(&self) -> impl Iterator<Item = (u8, Option<&str>)> + '_ {
        self.winners
            .iter()
            .map(|(&hole, player)| (hole, Some(player.as_str()).filter(|p| !p.is_empty())))
    }

    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<u8, String> {
        &self.winners
    }
}

/// Holes (1-based, ascending) won outright by each team.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct SkinsResult {
    by_team: BTreeMap<String, Vec<u8>>,
}

impl SkinsResult {
    pub(crate) fn award(&mut self, team: &str, hole_number: u8) {
        self.by_team
            .entry(team.to_string())
            .or_default()
            .push(hole_number);
    }

    #[must_use]
    pub fn holes_for(&self, team: &str) -> &[u8] {
        self.by_team
            .get(team)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_skin(&self, team: &str, hole_number: u8) -> bool {
        self.holes_for(team).contains(&hole_number)
    }

    #[must_use]
    pub fn total_skins(&self) -> usize {
        self.by_team.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_team.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.by_team
            .iter()
            .map(|(team, holes)| (team.as_str(), holes.as_slice()))
    }

    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.by_team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_totals_and_nines() {
        let mut holes = [4; HOLE_COUNT];
        holes[0] = 3;
        holes[17] = 0;
        let record = ScoreRecord::new("A", holes, 70);
        assert_eq!(record.total, 67);
        assert_eq!(record.to_par, -3);
        assert_eq!(record.front_nine(), 35);
        assert_eq!(record.back_nine(), 32);
        assert_eq!(record.holes_played(), 17);
        assert_eq!(record.hole(17), 0);
        assert_eq!(record.hole(40), 0);
    }

    #[test]
    fn out_of_range_holes_count_as_unplayed() {
        let mut holes = [i32::MAX; HOLE_COUNT];
        holes[0] = 4;
        holes[1] = -3;
        holes[2] = MAX_HOLE_STROKES;
        let record = ScoreRecord::new("A", holes, 70);
        assert_eq!(record.total, 4 + MAX_HOLE_STROKES);
        assert_eq!(record.holes_played(), 2);
    }

    #[test]
    fn closest_to_pin_only_accepts_contest_holes() {
        let mut ctp = ClosestToPin::new(&[4, 6, 9, 13]);
        ctp.set(6, " Foxx ").unwrap();
        assert_eq!(ctp.get(6), Some("Foxx"));
        assert_eq!(ctp.get(4), None);
        assert_eq!(ctp.set(5, "Foxx"), Err(OutingError::InvalidClosestToPinHole(5)));

        ctp.set(6, "").unwrap();
        assert_eq!(ctp.get(6), None);
        assert_eq!(ctp.entries().count(), 4);
    }

    #[test]
    fn closest_to_pin_restore_drops_stale_holes() {
        let saved: BTreeMap<u8, String> =
            [(4, "Ben".to_string()), (7, "Jim".to_string())].into_iter().collect();
        let ctp = ClosestToPin::restore(&[4, 6, 9, 13], &saved);
        assert_eq!(ctp.get(4), Some("Ben"));
        assert!(!ctp.as_map().contains_key(&7));
    }
}
