pub mod config;
pub mod relative;

pub use config::*;
pub use relative::*;
