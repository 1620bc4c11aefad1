use golf_outing::course::{Course, DEFAULT_PARS, HOLE_COUNT};
use golf_outing::mvu::{Msg, Outing, dispatch};
use golf_outing::storage::{
    JsonFileStorage, MemoryStorage, SqliteStorage, Storage, StorageError, decode_state,
};
use std::cell::Cell;
use std::io;
use tempfile::TempDir;

const TEAM_A: &str = "Dan & Jason";
const TEAM_B: &str = "Foxx & Jack";

fn birdie_on(hole_idx: usize) -> Vec<String> {
    let mut holes = DEFAULT_PARS;
    holes[hole_idx] -= 1;
    holes.iter().map(i32::to_string).collect()
}

fn play_a_little(outing: &mut Outing, storage: &dyn Storage) {
    outing.submit_score(storage, TEAM_A, &birdie_on(0)).unwrap();
    outing.submit_score(storage, TEAM_B, &birdie_on(5)).unwrap();
    outing.set_closest_to_pin(storage, 4, "Foxx").unwrap();
}

#[test]
fn test2_every_mutation_writes_a_full_snapshot() {
    let storage = MemoryStorage::new();
    let mut outing = Outing::new(Course::default());
    play_a_little(&mut outing, &storage);
    assert_eq!(storage.writes(), 3);

    let state = decode_state(&storage.contents().unwrap()).unwrap();
    assert_eq!(state.scores.len(), 2);
    assert_eq!(state.closest_to_pin.get(&4).map(String::as_str), Some("Foxx"));
    assert_eq!(state.skins_winners.get(TEAM_A), Some(&vec![1]));
    assert_eq!(state.skins_winners.get(TEAM_B), Some(&vec![6]));
    assert!(state.saved_at.is_some());

    dispatch(
        &mut outing,
        Msg::RemoveScore {
            team: TEAM_B.to_string(),
        },
        &storage,
    )
    .unwrap();
    assert_eq!(storage.writes(), 4);
    let state = decode_state(&storage.contents().unwrap()).unwrap();
    assert_eq!(state.scores.len(), 1);
    assert!(state.skins_winners.get(TEAM_B).is_none());
}

#[test]
fn test2_json_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("nested").join("outing.json"));
    assert!(storage.load().unwrap().is_none());

    let mut outing = Outing::new(Course::default());
    play_a_little(&mut outing, &storage);

    let reopened = Outing::open(Course::default(), &storage).unwrap();
    assert_eq!(reopened.store.all(), outing.store.all());
    assert_eq!(reopened.closest_to_pin, outing.closest_to_pin);
    assert_eq!(reopened.skins, outing.skins);
    assert_eq!(reopened.saved_at, outing.saved_at);
}

#[test]
fn test2_sqlite_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outing.sqlite3");
    {
        let storage = SqliteStorage::open(&path, "golf_outing_scores").unwrap();
        let mut outing = Outing::new(Course::default());
        play_a_little(&mut outing, &storage);
        outing.submit_score(&storage, TEAM_A, &["3"; 18]).unwrap();
    }

    let storage = SqliteStorage::open(&path, "golf_outing_scores").unwrap();
    let reopened = Outing::open(Course::default(), &storage).unwrap();
    assert_eq!(reopened.store.len(), 2);
    assert_eq!(reopened.store.get(TEAM_A).map(|r| r.total), Some(54));
    assert_eq!(reopened.closest_to_pin.get(4), Some("Foxx"));

    let other_key = SqliteStorage::open(&path, "another_outing").unwrap();
    assert!(other_key.load().unwrap().is_none());
}

#[test]
fn test2_malformed_state_falls_back_to_empty() {
    for raw in ["not json at all", "[]", r#"{"scores": 7}"#, r#"{"scores": [{"team": "Dan & Jason", "holes": [1]}]}"#] {
        let storage = MemoryStorage::with_contents(raw);
        assert!(matches!(storage.load(), Err(StorageError::Malformed(_))));

        let mut outing = Outing::open(Course::default(), &storage).unwrap();
        assert!(outing.store.is_empty());
        assert!(outing.skins.is_empty());
        assert_eq!(outing.closest_to_pin.entries().count(), 4);

        // still usable, and the next save replaces the bad document
        outing.submit_score(&storage, TEAM_A, &birdie_on(2)).unwrap();
        assert!(storage.load().unwrap().is_some());
    }
}

#[test]
fn test2_restore_recomputes_and_drops_unknown_teams() {
    let raw = r#"{
        "scores": [
            {"team": "Dan & Jason", "score": 0, "toPar": "+99", "holes": [3,4,4,3,4,3,4,4,3,4,4,5,3,4,4,4,5,4]},
            {"team": "Ghosts", "score": 70, "toPar": 0, "holes": [4,4,4,3,4,3,4,4,3,4,4,5,3,4,4,4,5,4]}
        ],
        "closestToPin": {"4": "Ben", "6": "", "9": "", "13": "", "7": "Stale"},
        "skinsWinners": {"Ghosts": [1, 2, 3]}
    }"#;
    let storage = MemoryStorage::with_contents(raw);
    let outing = Outing::open(Course::default(), &storage).unwrap();

    assert_eq!(outing.store.len(), 1);
    let record = outing.store.get(TEAM_A).unwrap();
    assert_eq!(record.total, 69);
    assert_eq!(record.to_par_display(), "-1");
    assert_eq!(outing.skins.holes_for(TEAM_A), &[1]);
    assert!(outing.skins.holes_for("Ghosts").is_empty());
    assert_eq!(outing.closest_to_pin.get(4), Some("Ben"));
    assert_eq!(outing.closest_to_pin.as_map().len(), 4);
    // loading never writes
    assert_eq!(storage.writes(), 0);
}

#[test]
fn test2_duplicate_saved_cards_keep_the_last() {
    let first: Vec<i32> = vec![5; HOLE_COUNT];
    let second: Vec<i32> = vec![4; HOLE_COUNT];
    let raw = serde_json::json!({
        "scores": [
            {"team": TEAM_A, "holes": first},
            {"team": TEAM_A, "holes": second}
        ]
    })
    .to_string();
    let outing = Outing::open(Course::default(), &MemoryStorage::with_contents(&raw)).unwrap();
    assert_eq!(outing.store.len(), 1);
    assert_eq!(outing.store.get(TEAM_A).map(|r| r.total), Some(72));
}

/// A store whose reads fail the way a locked or unreadable file does.
#[derive(Default)]
struct UnreadableStorage {
    writes: Cell<usize>,
}

impl Storage for UnreadableStorage {
    fn read_raw(&self) -> Result<Option<String>, StorageError> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied").into())
    }

    fn write_raw(&self, _contents: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[test]
fn test2_unreadable_store_is_an_error_not_an_empty_outing() {
    let storage = UnreadableStorage::default();
    let result = Outing::open(Course::default(), &storage);
    assert!(matches!(result, Err(StorageError::Io(_))));
    assert_eq!(storage.writes.get(), 0);
}

#[test]
fn test2_json_store_that_is_a_directory_is_not_clobbered() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path());
    assert!(Outing::open(Course::default(), &storage).is_err());
    assert!(dir.path().is_dir());
}

#[test]
fn test2_huge_saved_holes_load_as_unplayed() {
    let raw = serde_json::json!({
        "scores": [{"team": TEAM_A, "holes": vec![2_000_000_000_i64; HOLE_COUNT]}]
    })
    .to_string();
    let outing = Outing::open(Course::default(), &MemoryStorage::with_contents(&raw)).unwrap();
    let record = outing.store.get(TEAM_A).unwrap();
    assert_eq!(record.total, 0);
    assert_eq!(record.holes_played(), 0);
}
