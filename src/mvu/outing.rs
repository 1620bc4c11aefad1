use chrono::{SecondsFormat, Utc};
use tracing::{debug, error, info, warn};

use crate::course::Course;
use crate::error::OutingError;
use crate::model::{ClosestToPin, SkinsResult};
use crate::score::compute_skins;
use crate::storage::{PersistedState, Storage, StorageError};
use crate::store::ScoreStore;

/// Everything one outing tracks. Owned by the caller and passed by reference
/// into every event.
#[derive(Debug, Clone)]
pub struct Outing {
    pub course: Course,
    pub store: ScoreStore,
    pub closest_to_pin: ClosestToPin,
    pub skins: SkinsResult,
    pub saved_at: Option<String>,
}

impl Outing {
    #[must_use]
    pub fn new(course: Course) -> Self {
        let closest_to_pin = ClosestToPin::new(course.closest_to_pin_holes());
        Self {
            course,
            store: ScoreStore::new(),
            closest_to_pin,
            skins: SkinsResult::default(),
            saved_at: None,
        }
    }

    /// Load the saved outing, starting empty if there is none or the saved
    /// document is malformed.
    ///
    /// # Errors
    /// Returns the storage error when the store itself cannot be read, so the
    /// existing snapshot is never overwritten by an empty outing.
    pub fn open(course: Course, storage: &dyn Storage) -> Result<Self, StorageError> {
        match storage.load() {
            Ok(Some(state)) => Ok(Self::restore(course, &state)),
            Ok(None) => {
                debug!("no saved outing, starting empty");
                Ok(Self::new(course))
            }
            Err(StorageError::Malformed(reason)) => {
                warn!(%reason, "discarding malformed saved outing and starting empty");
                Ok(Self::new(course))
            }
            Err(e) => Err(e),
        }
    }

    /// Rebuild from a saved snapshot. Totals and skins are recomputed; cards
    /// for teams no longer on the roster are dropped.
    #[must_use]
    pub fn restore(course: Course, state: &PersistedState) -> Self {
        let mut outing = Self::new(course);
        for saved in &state.scores {
            let holes = match saved.hole_values() {
                Ok(holes) => holes,
                Err(e) => {
                    warn!(team = %saved.team, error = %e, "skipping saved card");
                    continue;
                }
            };
            if let Err(e) = outing.store.upsert_holes(&outing.course, &saved.team, holes) {
                warn!(error = %e, "skipping saved card");
            }
        }
        outing.closest_to_pin =
            ClosestToPin::restore(outing.course.closest_to_pin_holes(), &state.closest_to_pin);
        outing.saved_at.clone_from(&state.saved_at);
        outing.recompute_skins();
        info!(teams = outing.store.len(), "restored saved outing");
        outing
    }

    #[must_use]
    pub fn persisted_state(&self) -> PersistedState {
        PersistedState::capture(
            self.store.all(),
            &self.closest_to_pin,
            &self.skins,
            self.saved_at.clone(),
        )
    }

    pub(crate) fn recompute_skins(&mut self) {
        self.skins = compute_skins(self.store.all(), &self.course.pars());
        debug!(skins = self.skins.total_skins(), "skins recomputed");
    }

    pub(crate) fn persist(&mut self, storage: &dyn Storage) {
        let previous = self
            .saved_at
            .replace(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        if let Err(e) = storage.save(&self.persisted_state()) {
            error!(error = %e, "failed to save outing");
            self.saved_at = previous;
        }
    }
}

/// Discrete events from the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SubmitScore { team: String, holes: Vec<String> },
    RemoveScore { team: String },
    SetClosestToPin { hole: u8, player: String },
}

/// Follow-up work an accepted event requires, run in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    RecomputeSkins,
    Persist,
}

/// Apply an event to the model. A rejected event leaves the model unchanged
/// and produces no effects.
///
/// # Errors
/// Returns `UnknownTeam`, `NotFound` or `InvalidClosestToPinHole`.
pub fn update(model: &mut Outing, msg: Msg) -> Result<Vec<Effect>, OutingError> {
    match msg {
        Msg::SubmitScore { team, holes } => {
            let record = model.store.upsert(&model.course, &team, holes.as_slice())?;
            info!(
                team = %record.team,
                total = record.total,
                to_par = %record.to_par_display(),
                "score recorded"
            );
            Ok(vec![Effect::RecomputeSkins, Effect::Persist])
        }
        Msg::RemoveScore { team } => {
            model.store.remove(&team)?;
            info!(team = %team, "score removed");
            Ok(vec![Effect::RecomputeSkins, Effect::Persist])
        }
        Msg::SetClosestToPin { hole, player } => {
            model.closest_to_pin.set(hole, &player)?;
            info!(hole, player = %player.trim(), "closest to pin updated");
            Ok(vec![Effect::Persist])
        }
    }
}

pub fn run_effect(model: &mut Outing, effect: Effect, storage: &dyn Storage) {
    match effect {
        Effect::RecomputeSkins => model.recompute_skins(),
        Effect::Persist => model.persist(storage),
    }
}
