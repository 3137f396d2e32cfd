// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// doctranslate-document — Document intake for DocTranslate.
//
// Normalises drag-and-drop and browsed files into one `UploadedFile` handle,
// and turns an uploaded file into plain text through the extraction policy
// (verbatim for text files, placeholders standing in for OCR, PDF and DOCX
// parsing).

pub mod extract;
pub mod upload;

pub use extract::{ContentKind, SimulatedExtractor, TextExtractor};
pub use upload::{FileSelection, UploadedFile};
