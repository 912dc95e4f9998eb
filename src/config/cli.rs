use crate::config::CliConfig;
use clap::Parser;
use std::ffi::OsString;

/// Single-dash two-letter spellings and the long flags they stand for.
pub const SITE_FLAG_ALIASES: [(&str, &str); 2] = [("-s1", "--file_1"), ("-s2", "--file_2")];

/// Rewrites `-s1`/`-s2` (also `-s1=PATH` and `-s1PATH`) to their long forms
/// so clap can parse them. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();
        if passthrough {
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(text) => rewrite_site_flag(text),
            None => None,
        };
        normalized.push(rewritten.map(OsString::from).unwrap_or(arg));
    }

    normalized
}

fn rewrite_site_flag(arg: &str) -> Option<String> {
    for (short, long) in SITE_FLAG_ALIASES {
        if arg == short {
            return Some(long.to_string());
        }
        if let Some(rest) = arg.strip_prefix(short) {
            let value = rest.strip_prefix('=').unwrap_or(rest);
            return Some(format!("{}={}", long, value));
        }
    }
    None
}

impl CliConfig {
    /// Parses the process arguments, accepting the `-s1`/`-s2` spellings.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}
