use std::collections::VecDeque;

use crate::error::OutingError;
use crate::mvu::outing::{Msg, Outing, run_effect, update};
use crate::storage::Storage;

/// Run one event to completion: apply `msg`, then drain its effects in order.
///
/// # Errors
/// Returns the rejection from [`update`]; no effects run in that case.
pub fn dispatch(model: &mut Outing, msg: Msg, storage: &dyn Storage) -> Result<(), OutingError> {
    let mut effects: VecDeque<_> = update(model, msg)?.into();
    while let Some(effect) = effects.pop_front() {
        run_effect(model, effect, storage);
    }
    Ok(())
}

impl Outing {
    /// # Errors
    /// Returns `UnknownTeam` if the team is not on the roster.
    pub fn submit_score<S: AsRef<str>>(
        &mut self,
        storage: &dyn Storage,
        team: &str,
        holes: &[S],
    ) -> Result<(), OutingError> {
        let holes = holes.iter().map(|h| h.as_ref().to_string()).collect();
        dispatch(
            self,
            Msg::SubmitScore {
                team: team.to_string(),
                holes,
            },
            storage,
        )
    }

    /// # Errors
    /// Returns `NotFound` if the team has no card.
    pub fn remove_score(&mut self, storage: &dyn Storage, team: &str) -> Result<(), OutingError> {
        dispatch(
            self,
            Msg::RemoveScore {
                team: team.to_string(),
            },
            storage,
        )
    }

    /// # Errors
    /// Returns `InvalidClosestToPinHole` if the hole is not a contest hole.
    pub fn set_closest_to_pin(
        &mut self,
        storage: &dyn Storage,
        hole: u8,
        player: &str,
    ) -> Result<(), OutingError> {
        dispatch(
            self,
            Msg::SetClosestToPin {
                hole,
                player: player.to_string(),
            },
            storage,
        )
    }
}
