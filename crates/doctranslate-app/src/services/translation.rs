// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Translate pipeline: extract the uploaded file, translate the text, and
// record the attempt as a `TranslationSession`.

use std::sync::Arc;

use doctranslate_core::error::{DocTranslateError, Result};
use doctranslate_core::{AppConfig, TranslationSession};
use doctranslate_document::{SimulatedExtractor, TextExtractor};
use doctranslate_translate::{SimulatedTranslator, Translator};
use tracing::{error, info, instrument};

use crate::workflow::TranslationRequest;

/// Result of one attempt. `error` is set exactly when the session failed.
#[derive(Debug)]
pub struct TranslationOutcome {
    pub session: TranslationSession,
    pub error: Option<DocTranslateError>,
}

/// Cheap to clone; backends are shared.
#[derive(Clone)]
pub struct TranslationService {
    extractor: Arc<dyn TextExtractor>,
    translator: Arc<dyn Translator>,
}

impl TranslationService {
    pub fn new(extractor: Arc<dyn TextExtractor>, translator: Arc<dyn Translator>) -> Self {
        Self {
            extractor,
            translator,
        }
    }

    /// Simulated backends with the configured latencies.
    pub fn simulated(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(SimulatedExtractor::with_delay(config.extraction_delay())),
            Arc::new(SimulatedTranslator::from_config(config)),
        )
    }

    /// Run one attempt for `request`. Never touches the workflow; hand the
    /// session to `Workflow::finish_translation` afterwards.
    #[instrument(skip_all, fields(file = %request.file.name(), target = %request.target_lang))]
    pub async fn run(&self, request: &TranslationRequest) -> TranslationOutcome {
        let mut session =
            TranslationSession::new(&request.source_lang, &request.target_lang);
        session.start();
        info!(
            session = %session.id,
            extractor = self.extractor.extractor_name(),
            translator = self.translator.provider_name(),
            "translation started"
        );

        match self.produce(request, &mut session).await {
            Ok(translated) => {
                info!(session = %session.id, chars = translated.chars().count(), "translation complete");
                session.complete(translated);
                TranslationOutcome {
                    session,
                    error: None,
                }
            }
            Err(e) => {
                error!(session = %session.id, "translation failed: {e}");
                session.fail(e.to_string());
                TranslationOutcome {
                    session,
                    error: Some(e),
                }
            }
        }
    }

    async fn produce(
        &self,
        request: &TranslationRequest,
        session: &mut TranslationSession,
    ) -> Result<String> {
        let original = self.extractor.extract(&request.file).await?;
        session.original_text = original;
        self.translator
            .translate(&session.original_text, &request.source_lang, &request.target_lang)
            .await
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("extractor", &self.extractor.extractor_name())
            .field("translator", &self.translator.provider_name())
            .finish()
    }
}
