pub mod pattern;
pub mod search;

pub use pattern::*;
pub use search::*;
