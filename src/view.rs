pub mod index;
pub mod scoreboard;
pub mod snapshot;
pub mod text;

pub use index::*;
pub use scoreboard::*;
pub use snapshot::*;
pub use text::*;
