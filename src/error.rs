use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutingError {
    #[error("unknown team: {0}")]
    UnknownTeam(String),
    #[error("no score recorded for team: {0}")]
    NotFound(String),
    #[error("hole {0} is not a closest-to-pin hole")]
    InvalidClosestToPinHole(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("{field} must list {expected} holes, found {found}")]
    HoleCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("hole {hole} has par {par}, expected 3 to 5")]
    InvalidPar { hole: usize, par: i32 },
    #[error("handicap ranks must be a permutation of 1..=18: {0}")]
    InvalidHandicapRanks(String),
    #[error("pot must be a positive amount, got {0}")]
    InvalidPot(String),
    #[error("duplicate team name: {0}")]
    DuplicateTeam(String),
    #[error("invalid closest-to-pin hole: {0}")]
    InvalidClosestToPinHole(u8),
}
