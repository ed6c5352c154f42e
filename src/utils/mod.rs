pub mod pattern;
pub mod short;
pub mod time;

pub use pattern::*;
pub use short::*;
pub use time::*;
