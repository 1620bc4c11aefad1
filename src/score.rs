pub mod ranking;
pub mod skins;
pub mod tiebreak;

pub use ranking::*;
pub use skins::*;
pub use tiebreak::*;
