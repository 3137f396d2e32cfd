// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the translate stage.
//
// Every failure is local to one translate attempt, so each message tells the
// user what to try next and whether retrying makes sense.

use crate::error::DocTranslateError;

/// Static note shown under every failed attempt.
pub const DEMO_DISCLAIMER: &str = "This is a demonstration: extraction and translation are simulated, \
     so results are illustrative only.";

/// A human-readable error with a plain English message and a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether pressing Translate again may succeed.
    pub retriable: bool,
}

impl HumanError {
    /// Message, suggestion and disclaimer joined for a plain-text surface.
    pub fn display_text(&self) -> String {
        format!("{}\n{}\n\n{}", self.message, self.suggestion, DEMO_DISCLAIMER)
    }
}

/// Convert a `DocTranslateError` into a `HumanError`.
pub fn humanize_error(err: &DocTranslateError) -> HumanError {
    match err {
        DocTranslateError::Extraction { file_name, source } => {
            if source.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: format!("We couldn't find \"{file_name}\" any more."),
                    suggestion: "It may have been moved or deleted. Try choosing the file again."
                        .into(),
                    retriable: false,
                }
            } else {
                HumanError {
                    message: format!("We couldn't read \"{file_name}\"."),
                    suggestion: "Try again, or upload a different file.".into(),
                    retriable: true,
                }
            }
        }

        DocTranslateError::Translation(detail) => HumanError {
            message: "The translation didn't finish.".into(),
            suggestion: format!("Press Translate to try again. ({detail})"),
            retriable: true,
        },

        DocTranslateError::InvalidTargetLanguage(code) => HumanError {
            message: "Please choose a language to translate into.".into(),
            suggestion: format!("\"{code}\" can only be used as the source language."),
            retriable: false,
        },

        DocTranslateError::TranslationInFlight => HumanError {
            message: "A translation is already running.".into(),
            suggestion: "Wait for it to finish before starting another one.".into(),
            retriable: true,
        },

        DocTranslateError::NoDocument => HumanError {
            message: "There's no document to translate yet.".into(),
            suggestion: "Go back to the Upload step and choose a file.".into(),
            retriable: false,
        },

        DocTranslateError::Config(detail) => HumanError {
            message: "The saved settings are not valid.".into(),
            suggestion: format!("Defaults are being used instead. ({detail})"),
            retriable: false,
        },

        DocTranslateError::Io(_) => HumanError {
            message: "There was a problem reading or writing a file.".into(),
            suggestion: "Try again. If this keeps happening, your device's storage may be full."
                .into(),
            retriable: true,
        },

        DocTranslateError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
        },
    }
}
