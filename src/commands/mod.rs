pub mod format;
pub mod init;
pub mod show;

pub use format::*;
pub use init::*;
pub use show::*;
