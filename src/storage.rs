pub mod json_file;
pub mod memory;
pub mod sqlite;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::course::{HOLE_COUNT, MAX_HOLE_STROKES};
use crate::model::{ClosestToPin, ScoreRecord, SkinsResult};
use crate::store::coerce_hole_value;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("malformed persisted state: {0}")]
    Malformed(String),
    #[error("could not encode state: {0}")]
    Encode(String),
}

/// One saved card. Only `team` and `holes` are read back; the totals are
/// written for anyone reading the raw document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersistedScore {
    pub team: String,
    #[serde(default)]
    pub score: Value,
    #[serde(rename = "toPar", default)]
    pub to_par: Value,
    pub holes: Vec<Value>,
}

impl PersistedScore {
    #[must_use]
    pub fn from_record(record: &ScoreRecord) -> Self {
        Self {
            team: record.team.clone(),
            score: Value::from(record.total),
            to_par: Value::from(record.to_par_display()),
            holes: record.holes.iter().map(|&h| Value::from(h)).collect(),
        }
    }

    /// # Errors
    /// Returns `Malformed` unless exactly 18 hole entries are present.
    pub fn hole_values(&self) -> Result<[i32; HOLE_COUNT], StorageError> {
        if self.holes.len() != HOLE_COUNT {
            return Err(StorageError::Malformed(format!(
                "team {} has {} holes",
                self.team,
                self.holes.len()
            )));
        }
        let mut holes = [0; HOLE_COUNT];
        for (slot, value) in holes.iter_mut().zip(&self.holes) {
            *slot = coerce_json_hole(value);
        }
        Ok(holes)
    }
}

fn coerce_json_hole(value: &Value) -> i32 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .and_then(|v| i32::try_from(v).ok())
            .filter(|v| (0..=MAX_HOLE_STROKES).contains(v))
            .unwrap_or(0),
        Value::String(s) => coerce_hole_value(s),
        _ => 0,
    }
}

/// The full snapshot written after every change.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub scores: Vec<PersistedScore>,
    #[serde(default)]
    pub closest_to_pin: BTreeMap<u8, String>,
    #[serde(default)]
    pub skins_winners: BTreeMap<String, Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl PersistedState {
    #[must_use]
    pub fn capture(
        records: &[ScoreRecord],
        closest_to_pin: &ClosestToPin,
        skins: &SkinsResult,
        saved_at: Option<String>,
    ) -> Self {
        Self {
            scores: records.iter().map(PersistedScore::from_record).collect(),
            closest_to_pin: closest_to_pin.as_map().clone(),
            skins_winners: skins.as_map().clone(),
            saved_at,
        }
    }
}

/// Parse a saved document, rejecting anything that is not the expected shape.
///
/// # Errors
/// Returns `Malformed` if the JSON does not parse or a card does not carry
/// 18 holes.
pub fn decode_state(raw: &str) -> Result<PersistedState, StorageError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(StorageError::Malformed("expected a JSON object".into()));
    }
    let state: PersistedState =
        serde_json::from_value(value).map_err(|e| StorageError::Malformed(e.to_string()))?;
    for score in &state.scores {
        score.hole_values()?;
    }
    Ok(state)
}

/// # Errors
/// Returns `Encode` if serialization fails.
pub fn encode_state(state: &PersistedState) -> Result<String, StorageError> {
    serde_json::to_string(state).map_err(|e| StorageError::Encode(e.to_string()))
}

/// Whole-document key-value persistence. Reads and writes are always the full
/// snapshot.
pub trait Storage {
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn read_raw(&self) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn write_raw(&self, contents: &str) -> Result<(), StorageError>;

    /// `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    /// Returns an error if reading fails or the saved document is malformed.
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        self.read_raw()?.as_deref().map(decode_state).transpose()
    }

    /// # Errors
    /// Returns an error if encoding or writing fails.
    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        self.write_raw(&encode_state(state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_documents_written_by_the_browser_scoreboard() {
        let holes: Vec<Value> = (0..18)
            .map(|i| match i {
                0 => json!(4),
                1 => json!("5"),
                2 => json!(null),
                3 => json!(""),
                _ => json!(3),
            })
            .collect();
        let raw = json!({
            "scores": [{ "team": "Dan & Jason", "score": 57, "toPar": -13, "holes": holes }],
            "closestToPin": { "4": "Ben", "6": "", "9": "", "13": "" },
            "skinsWinners": { "Dan & Jason": [5] }
        })
        .to_string();

        let state = decode_state(&raw).unwrap();
        assert_eq!(state.scores.len(), 1);
        let values = state.scores[0].hole_values().unwrap();
        assert_eq!(&values[..5], &[4, 5, 0, 0, 3]);
        assert_eq!(state.closest_to_pin.get(&4).map(String::as_str), Some("Ben"));
        assert_eq!(state.saved_at, None);
    }

    #[test]
    fn rejects_garbage_and_wrong_shapes() {
        assert!(matches!(decode_state("{not json"), Err(StorageError::Malformed(_))));
        assert!(matches!(decode_state("[1,2,3]"), Err(StorageError::Malformed(_))));
        assert!(matches!(
            decode_state(r#"{"scores": "nope"}"#),
            Err(StorageError::Malformed(_))
        ));
        assert!(matches!(
            decode_state(r#"{"scores": [{"team": "A", "holes": [4, 4]}]}"#),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn empty_object_is_an_empty_outing() {
        assert_eq!(decode_state("{}").unwrap(), PersistedState::default());
    }
}
