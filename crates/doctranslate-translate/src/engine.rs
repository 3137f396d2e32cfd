// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Translation engine contract and its simulated implementation.
//
// The simulator never performs real translation. It is deterministic: the
// same text and target always give the same output. For a target without a
// phrase table it wraps whatever it is given in a banner, so translating an
// already-translated text nests banners.

use std::time::Duration;

use async_trait::async_trait;
use doctranslate_core::error::{DocTranslateError, Result};
use doctranslate_core::languages::{self, AUTO_DETECT};
use doctranslate_core::AppConfig;
use tracing::{debug, instrument};

use crate::phrases;

/// Trailing note appended to every banner-wrapped fallback.
pub const BACKEND_NOTE: &str =
    "Note: This is a simulated translation. Production use requires a real translation backend.";

/// Generic trait for translation providers.
///
/// Implementations may call a network service; the workflow only depends on
/// this contract.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` (possibly `"auto"`) into
    /// `target_lang`.
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;

    /// Name used in logs to identify which provider handled a translation.
    fn provider_name(&self) -> &str;
}

/// Compose the fallback output: banner naming the target, the input
/// verbatim, then the backend note.
pub fn fallback_translation(text: &str, target_name: &str) -> String {
    format!("[Translated to {target_name}]\n\n{text}\n\n---\n{BACKEND_NOTE}")
}

/// The synchronous core of the simulator.
pub fn simulate(text: &str, target_lang: &str) -> Result<String> {
    if target_lang == AUTO_DETECT {
        return Err(DocTranslateError::InvalidTargetLanguage(target_lang.to_owned()));
    }

    let target_name = languages::lookup(target_lang);
    match phrases::table_for(target_lang) {
        Some(table) => Ok(table.apply(text)),
        None => Ok(fallback_translation(text, target_name)),
    }
}

/// Deterministic phrase-substitution translator with simulated latency.
#[derive(Debug, Clone, Default)]
pub struct SimulatedTranslator {
    delay: Duration,
}

impl SimulatedTranslator {
    /// Translator that answers immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translator that waits `delay` before answering, standing in for a
    /// network round trip.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_delay(config.translation_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Translator for SimulatedTranslator {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let output = simulate(text, target_lang)?;
        debug!(
            table = phrases::table_for(target_lang).is_some(),
            "simulated translation finished"
        );
        Ok(output)
    }

    fn provider_name(&self) -> &str {
        "Simulated Translator"
    }
}
