// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DocTranslate — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod format;
pub mod human_errors;
pub mod languages;
pub mod types;

pub use config::AppConfig;
pub use error::DocTranslateError;
pub use languages::LanguageEntry;
pub use types::*;
