// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DocTranslateError, Result};
use crate::languages;

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Source language preselected in the Translate stage.
    pub default_source_language: String,
    /// Target language preselected in the Translate stage. Never `"auto"`.
    pub default_target_language: String,
    /// Simulated backend latency for each translation, in milliseconds.
    pub translation_delay_ms: u64,
    /// Simulated latency for each extraction, in milliseconds.
    pub extraction_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_source_language: languages::AUTO_DETECT.to_owned(),
            default_target_language: "en".to_owned(),
            translation_delay_ms: 3000,
            extraction_delay_ms: 0,
        }
    }
}

impl AppConfig {
    pub fn translation_delay(&self) -> Duration {
        Duration::from_millis(self.translation_delay_ms)
    }

    pub fn extraction_delay(&self) -> Duration {
        Duration::from_millis(self.extraction_delay_ms)
    }

    /// Reject language defaults the pickers could never produce.
    pub fn validate(&self) -> Result<()> {
        if !languages::is_known(&self.default_source_language) {
            return Err(DocTranslateError::Config(format!(
                "unknown source language \"{}\"",
                self.default_source_language
            )));
        }
        if !languages::is_valid_target(&self.default_target_language) {
            return Err(DocTranslateError::Config(format!(
                "\"{}\" is not a valid target language",
                self.default_target_language
            )));
        }
        Ok(())
    }
}
