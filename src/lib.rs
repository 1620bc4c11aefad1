pub mod args;
pub mod config;
pub mod course;
pub mod error;
pub mod model;
pub mod mvu;
pub mod score;
pub mod storage;
pub mod store;
pub mod view;

pub use course::{Course, HOLE_COUNT, TeamPairing};
pub use error::{CourseError, OutingError};
pub use model::{ClosestToPin, ScoreCategory, ScoreRecord, SkinsResult};
pub use mvu::{Msg, Outing, dispatch};
pub use store::ScoreStore;
