#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::StdinSource, CliConfig};

pub use crate::core::{engine::CheckEngine, Verdict};
pub use utils::error::{CheckError, Result};
