#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};

/// Arguments of the `sec-pipe` entry point. Both paths are kept for later
/// stages and are not read or checked here.
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "sec-pipe"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Entry point of the two-site FASTA comparison pipeline")
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// path to your FASTA file from site 1 (also -s1)
    #[cfg_attr(feature = "cli", arg(long = "file_1", value_name = "PATH"))]
    pub file_1: Option<String>,

    /// path to your FASTA file from site 2 (also -s2)
    #[cfg_attr(feature = "cli", arg(long = "file_2", value_name = "PATH"))]
    pub file_2: Option<String>,
}
