pub mod outing;
pub mod runtime;

pub use outing::*;
pub use runtime::*;
