use tracing::warn;

use crate::course::{Course, HOLE_COUNT, MAX_HOLE_STROKES};
use crate::error::OutingError;
use crate::model::ScoreRecord;

/// Coerce a raw hole entry to strokes.
///
/// Leading whitespace is skipped and the leading run of digits is read, so
/// `"5"`, `" 5 "` and `"5x"` are all 5. Blank, non-numeric, negative and
/// out-of-range input is 0.
#[must_use]
pub fn coerce_hole_value(raw: &str) -> i32 {
    let s = raw.trim_start();
    if s.starts_with('-') {
        return 0;
    }
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end]
        .parse()
        .ok()
        .filter(|strokes| *strokes <= MAX_HOLE_STROKES)
        .unwrap_or(0)
}

/// Coerce a submission to exactly 18 holes: missing values are 0 and values
/// past the 18th are ignored.
#[must_use]
pub fn coerce_holes<S: AsRef<str>>(raw: &[S]) -> [i32; HOLE_COUNT] {
    if raw.len() > HOLE_COUNT {
        warn!(
            supplied = raw.len(),
            "ignoring hole values past the {HOLE_COUNT}th"
        );
    }
    let mut holes = [0; HOLE_COUNT];
    for (slot, value) in holes.iter_mut().zip(raw) {
        *slot = coerce_hole_value(value.as_ref());
    }
    holes
}

/// At most one record per team, kept in first-submission order.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    records: Vec<ScoreRecord>,
}

impl ScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record raw hole entries for a team, replacing any earlier submission.
    ///
    /// # Errors
    /// Returns `UnknownTeam` if the team is not on the roster; the store is
    /// left untouched.
    pub fn upsert<S: AsRef<str>>(
        &mut self,
        course: &Course,
        team: &str,
        raw_holes: &[S],
    ) -> Result<&ScoreRecord, OutingError> {
        self.upsert_holes(course, team, coerce_holes(raw_holes))
    }

    /// Record already-numeric holes for a team. Negative values become 0.
    ///
    /// # Errors
    /// Returns `UnknownTeam` if the team is not on the roster.
    pub fn upsert_holes(
        &mut self,
        course: &Course,
        team: &str,
        holes: [i32; HOLE_COUNT],
    ) -> Result<&ScoreRecord, OutingError> {
        if !course.is_known_team(team) {
            return Err(OutingError::UnknownTeam(team.to_string()));
        }
        let record = ScoreRecord::new(team, holes, course.total_par());
        let idx = match self.position(team) {
            Some(idx) => {
                self.records[idx] = record;
                idx
            }
            None => {
                self.records.push(record);
                self.records.len() - 1
            }
        };
        Ok(&self.records[idx])
    }

    /// # Errors
    /// Returns `NotFound` if the team has no record.
    pub fn remove(&mut self, team: &str) -> Result<ScoreRecord, OutingError> {
        let idx = self
            .position(team)
            .ok_or_else(|| OutingError::NotFound(team.to_string()))?;
        Ok(self.records.remove(idx))
    }

    #[must_use]
    pub fn all(&self) -> &[ScoreRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, team: &str) -> Option<&ScoreRecord> {
        self.records.iter().find(|r| r.team == team)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, team: &str) -> Option<usize> {
        self.records.iter().position(|r| r.team == team)
    }
}
