// crates/hdrcase-cli/src/cmd/mod.rs

use std::path::PathBuf;

use clap::Args;
use hdrcase_core::{Mode, Normalizer};

pub mod check;
pub mod rewrite;

/// File the header table generator writes.
pub const DEFAULT_TARGET: &str = "src/header/name.rs";

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Generated source file to normalize
    #[arg(default_value = DEFAULT_TARGET)]
    pub path: PathBuf,

    /// Rewrite rule for header-name literals: lowercase or canonical
    #[arg(long, default_value_t = Mode::Canonical)]
    pub mode: Mode,

    /// Leave single-character literals (b'a') untouched
    #[arg(long)]
    pub skip_chars: bool,
}

impl TargetArgs {
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.mode).with_upper_chars(!self.skip_chars)
    }
}
