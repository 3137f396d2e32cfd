// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the DocTranslate workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One step of the four-step workflow, in progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Upload,
    Translate,
    Edit,
    Download,
}

impl Stage {
    /// All stages in linear order.
    pub const ALL: [Stage; 4] = [Stage::Upload, Stage::Translate, Stage::Edit, Stage::Download];

    /// Position in the linear progression (0-based).
    pub fn index(self) -> usize {
        match self {
            Self::Upload => 0,
            Self::Translate => 1,
            Self::Edit => 2,
            Self::Download => 3,
        }
    }

    /// The stage a plain "proceed" action leads to, if any.
    pub fn next(self) -> Option<Stage> {
        match self {
            Self::Upload => Some(Self::Translate),
            Self::Translate => Some(Self::Edit),
            Self::Edit => Some(Self::Download),
            Self::Download => None,
        }
    }

    /// Label shown by the navigation surface.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload Document",
            Self::Translate => "Translate Content",
            Self::Edit => "Edit & Review",
            Self::Download => "Download Result",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Upload => "upload",
            Self::Translate => "translate",
            Self::Edit => "edit",
            Self::Download => "download",
        };
        f.write_str(name)
    }
}

/// Out-of-band request from a stage to jump ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shortcut {
    /// Upload → Edit, bypassing Translate.
    SkipToEdit,
    /// Translate (or Edit) → Download.
    SkipToDownload,
}

impl Shortcut {
    /// Stage the shortcut lands on when accepted.
    pub fn destination(self) -> Stage {
        match self {
            Self::SkipToEdit => Stage::Edit,
            Self::SkipToDownload => Stage::Download,
        }
    }
}

/// Unique identifier for a translation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle states of a translation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Created, not started.
    Idle,
    /// Extraction or translation running.
    InProgress,
    /// Translated text is available.
    Complete,
    /// Failed; see `error_message`.
    Failed,
}

/// Message recorded when a failure carries no description of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Translation failed. Please try again.";

/// A single translate attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSession {
    pub id: SessionId,
    pub source_lang: String,
    pub target_lang: String,
    pub original_text: String,
    /// Empty until the session reaches `Complete`.
    pub translated_text: String,
    pub status: SessionStatus,
    /// Present only when `status` is `Failed`.
    pub error_message: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl TranslationSession {
    pub fn new(source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            original_text: String::new(),
            translated_text: String::new(),
            status: SessionStatus::Idle,
            error_message: None,
            started_at: None,
            finished_at: None,
        }
    }

    /// Idle → InProgress.
    pub fn start(&mut self) {
        self.status = SessionStatus::InProgress;
        self.started_at = Some(Utc::now());
    }

    /// InProgress → Complete with the translated text.
    pub fn complete(&mut self, translated_text: String) {
        self.translated_text = translated_text;
        self.status = SessionStatus::Complete;
        self.error_message = None;
        self.finished_at = Some(Utc::now());
    }

    /// InProgress → Failed. An empty message is replaced by
    /// [`GENERIC_FAILURE_MESSAGE`]; any partial output is discarded.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error_message = Some(if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_owned()
        } else {
            message
        });
        self.translated_text.clear();
        self.status = SessionStatus::Failed;
        self.finished_at = Some(Utc::now());
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }
}

/// Formats offered on the Download stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Pdf,
    Docx,
    Txt,
    Png,
}

impl ExportFormat {
    /// All formats, recommended first.
    pub const ALL: [ExportFormat; 4] = [Self::Pdf, Self::Docx, Self::Txt, Self::Png];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
            Self::Png => "PNG",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Pdf => "Preserves original layout and formatting",
            Self::Docx => "Editable Word document",
            Self::Txt => "Plain text file",
            Self::Png => "High-quality image format",
        }
    }

    pub fn is_recommended(&self) -> bool {
        matches!(self, Self::Pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Upload < Stage::Translate);
        assert!(Stage::Edit < Stage::Download);
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn download_has_no_next() {
        assert_eq!(Stage::Upload.next(), Some(Stage::Translate));
        assert_eq!(Stage::Download.next(), None);
    }

    #[test]
    fn session_lifecycle() {
        let mut session = TranslationSession::new("auto", "es");
        assert_eq!(session.status, SessionStatus::Idle);
        assert!(session.translated_text.is_empty());

        session.start();
        assert_eq!(session.status, SessionStatus::InProgress);
        assert!(session.started_at.is_some());

        session.complete("Hola".into());
        assert!(session.is_complete());
        assert_eq!(session.error_message, None);
    }

    #[test]
    fn empty_failure_message_uses_generic_text() {
        let mut session = TranslationSession::new("auto", "es");
        session.start();
        session.fail("  ");
        assert_eq!(session.status, SessionStatus::Failed);
        assert_eq!(session.error_message.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(session.translated_text.is_empty());
    }

    #[test]
    fn only_pdf_is_recommended() {
        let recommended: Vec<_> = ExportFormat::ALL.iter().filter(|f| f.is_recommended()).collect();
        assert_eq!(recommended, [&ExportFormat::Pdf]);
    }

    #[test]
    fn shortcut_destinations() {
        assert_eq!(Shortcut::SkipToEdit.destination(), Stage::Edit);
        assert_eq!(Shortcut::SkipToDownload.destination(), Stage::Download);
    }
}
