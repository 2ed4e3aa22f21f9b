pub mod canonical;
pub mod error;
pub mod file;
pub mod normalize;

pub use crate::canonical::{canonicalize, upper_form};
pub use crate::error::{HdrError, Result};
pub use crate::file::{check_file, normalize_file, FileReport};
pub use crate::normalize::{ChangedLine, LineOutcome, Mode, Normalizer, TextOutcome};
