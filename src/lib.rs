pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalStorage, ShellRunner};
pub use config::{toml_config::CompareConfig, CliConfig};
pub use core::{compare::ComparePipeline, engine::PipelineEngine, entry::EntryPoint};
pub use utils::error::{PipeError, Result};
