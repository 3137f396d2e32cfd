// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for DocTranslate.

use thiserror::Error;

/// Top-level error type for all DocTranslate operations.
#[derive(Debug, Error)]
pub enum DocTranslateError {
    // -- Extraction --
    #[error("could not read the contents of \"{file_name}\"")]
    Extraction {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    // -- Translation --
    #[error("translation failed: {0}")]
    Translation(String),

    #[error("\"{0}\" cannot be used as a target language")]
    InvalidTargetLanguage(String),

    #[error("a translation is already in progress")]
    TranslationInFlight,

    #[error("no document has been uploaded")]
    NoDocument,

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocTranslateError {
    /// Name of the file involved, when the error is tied to one.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Extraction { file_name, .. } => Some(file_name),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocTranslateError>;
