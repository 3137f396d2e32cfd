// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text extraction policy.
//
// Decides how to obtain plain text from an uploaded file. Plain text files
// are returned verbatim; images, PDFs and Word documents get a fixed
// placeholder until a real OCR engine or parser is plugged in behind
// `TextExtractor`.
//
// Dispatch is a rule table. Plain text wins outright when either its kind or
// its suffix matches. Otherwise the declared kind decides, and the file-name
// suffix is consulted only when no rule recognises the kind.

use std::time::Duration;

use async_trait::async_trait;
use doctranslate_core::error::Result;
use tracing::{debug, instrument};

use crate::upload::{UploadedFile, extension_of};

/// How a file's text is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    PlainText,
    Image,
    Pdf,
    WordDocument,
    Unsupported,
}

struct Rule {
    kind: ContentKind,
    matches_kind: fn(&str) -> bool,
    extensions: &'static [&'static str],
}

fn is_text_kind(kind: &str) -> bool {
    kind.starts_with("text/")
}

fn is_image_kind(kind: &str) -> bool {
    kind.starts_with("image/")
}

fn is_pdf_kind(kind: &str) -> bool {
    kind.contains("pdf")
}

fn is_word_kind(kind: &str) -> bool {
    kind.contains("officedocument")
}

static RULES: &[Rule] = &[
    Rule {
        kind: ContentKind::PlainText,
        matches_kind: is_text_kind,
        extensions: &["txt"],
    },
    Rule {
        kind: ContentKind::Image,
        matches_kind: is_image_kind,
        extensions: &["jpg", "jpeg", "png", "gif", "bmp"],
    },
    Rule {
        kind: ContentKind::Pdf,
        matches_kind: is_pdf_kind,
        extensions: &["pdf"],
    },
    Rule {
        kind: ContentKind::WordDocument,
        matches_kind: is_word_kind,
        extensions: &["docx"],
    },
];

impl ContentKind {
    /// Classify a file by its declared kind and, failing that, its name.
    pub fn classify(declared_kind: &str, file_name: &str) -> Self {
        let kind = declared_kind.to_ascii_lowercase();
        let ext = extension_of(file_name);
        let ext_matches = |rule: &Rule| {
            ext.as_deref()
                .is_some_and(|e| rule.extensions.contains(&e))
        };

        let Some((text, rest)) = RULES.split_first() else {
            return Self::Unsupported;
        };
        if (text.matches_kind)(&kind) || ext_matches(text) {
            return text.kind;
        }

        rest.iter()
            .find(|rule| (rule.matches_kind)(&kind))
            .or_else(|| rest.iter().find(|rule| ext_matches(*rule)))
            .map(|rule| rule.kind)
            .unwrap_or(Self::Unsupported)
    }
}

/// Placeholder standing in for OCR output.
pub fn image_placeholder(file_name: &str) -> String {
    format!(
        "[Text recognized from image: {file_name}]\n\n\
         This is sample content standing in for the text found in \"{file_name}\". \
         In a real implementation, an OCR engine would read the text from your image \
         and it would appear here."
    )
}

/// Placeholder standing in for PDF text extraction.
pub fn pdf_placeholder(file_name: &str) -> String {
    format!(
        "[Text extracted from PDF: {file_name}]\n\n\
         This is sample content standing in for the text of \"{file_name}\". \
         In a real implementation, the text of every page would be extracted \
         from your PDF while preserving its structure."
    )
}

/// Placeholder standing in for DOCX parsing.
pub fn document_placeholder(file_name: &str) -> String {
    format!(
        "[Text extracted from document: {file_name}]\n\n\
         This is sample content standing in for the text of \"{file_name}\". \
         In a real implementation, the paragraphs of your Word document would \
         be parsed and would appear here."
    )
}

/// Placeholder for kinds no rule understands.
pub fn unsupported_placeholder(file_name: &str, declared_kind: &str) -> String {
    let kind = if declared_kind.trim().is_empty() {
        "unknown"
    } else {
        declared_kind
    };
    format!(
        "[Unsupported file type: {kind}]\n\n\
         Text could not be extracted from \"{file_name}\". \
         Supported formats are PDF documents, images (JPG, PNG), text files and Word documents."
    )
}

/// Turns an uploaded file into plain text.
///
/// Real OCR, PDF or DOCX backends implement this trait; the workflow only
/// depends on the contract.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from `file`.
    ///
    /// Fails with `DocTranslateError::Extraction` when the file's content
    /// cannot be read.
    async fn extract(&self, file: &UploadedFile) -> Result<String>;

    /// Name used in logs.
    fn extractor_name(&self) -> &str;
}

/// Extractor implementing the placeholder policy.
#[derive(Debug, Clone, Default)]
pub struct SimulatedExtractor {
    delay: Duration,
}

impl SimulatedExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixed simulated processing delay before each extraction.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TextExtractor for SimulatedExtractor {
    #[instrument(skip_all, fields(file = %file.name()))]
    async fn extract(&self, file: &UploadedFile) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let kind = ContentKind::classify(file.declared_kind(), file.name());
        debug!(?kind, declared = %file.declared_kind(), "extraction rule selected");

        let text = match kind {
            ContentKind::PlainText => {
                let bytes = file.read_bytes().await?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
            ContentKind::Image => image_placeholder(file.name()),
            ContentKind::Pdf => pdf_placeholder(file.name()),
            ContentKind::WordDocument => document_placeholder(file.name()),
            ContentKind::Unsupported => {
                unsupported_placeholder(file.name(), file.declared_kind())
            }
        };

        debug!(chars = text.chars().count(), "extraction finished");
        Ok(text)
    }

    fn extractor_name(&self) -> &str {
        "Simulated Extractor"
    }
}
