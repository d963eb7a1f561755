pub mod config;
pub mod error;
pub mod instructions;
pub mod io;
pub mod paths;
pub mod scaffold;
pub mod sentinel;
pub mod settings;
pub mod skills;

pub use error::{Result, VifloError};
pub use io::{WriteOutcome, WriteStatus};
