// Licensed under the MIT license.

//! Error type shared by the membership set, the spell checker and the
//! vocabulary loader.
use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when building a membership set or a spell checker.
///
/// Querying never fails: `add`, `contains` and `spell_check` are total over
/// their inputs, so every variant here is a construction or loading error.
#[derive(Debug, Error)]
pub enum Error {
    /// A sizing parameter was out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A spell checker was requested for a vocabulary with no words.
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    /// Reading a vocabulary source failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
