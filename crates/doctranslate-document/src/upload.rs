// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Uploaded file handle.
//
// A file reaches the core either by drag-and-drop (bytes already in memory)
// or through the browse picker (a path on disk). Both are normalised here
// into one immutable `UploadedFile`; the content of a browsed file is only
// read when extraction asks for it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use doctranslate_core::error::{DocTranslateError, Result};
use tracing::{debug, instrument};

/// Extensions offered by the browse picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png", "txt", "docx"];

/// Raw input from the file-selection surface.
#[derive(Debug, Clone)]
pub enum FileSelection {
    /// Dropped onto the upload area; the bytes arrive with the event.
    Dropped {
        name: String,
        declared_kind: String,
        bytes: Vec<u8>,
    },
    /// Chosen through the browse picker. A missing kind is inferred from the
    /// file extension.
    Browsed {
        path: PathBuf,
        declared_kind: Option<String>,
    },
}

#[derive(Debug, Clone)]
enum FileContent {
    Memory(Arc<[u8]>),
    Disk(PathBuf),
}

/// A user-selected file. Cloning is cheap; content is shared, never copied.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    name: String,
    byte_size: u64,
    declared_kind: String,
    content: FileContent,
}

impl UploadedFile {
    /// Build a handle around in-memory content.
    pub fn from_bytes(
        name: impl Into<String>,
        declared_kind: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            name: name.into(),
            byte_size: bytes.len() as u64,
            declared_kind: declared_kind.into(),
            content: FileContent::Memory(Arc::from(bytes)),
        }
    }

    /// Normalise a selection into a handle.
    ///
    /// Browsed files are stat-ed for their size but not read.
    #[instrument(skip_all)]
    pub async fn from_selection(selection: FileSelection) -> Result<Self> {
        match selection {
            FileSelection::Dropped {
                name,
                declared_kind,
                bytes,
            } => {
                debug!(file = %name, kind = %declared_kind, "normalising dropped file");
                Ok(Self::from_bytes(name, declared_kind, bytes))
            }
            FileSelection::Browsed {
                path,
                declared_kind,
            } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "document".into());
                let metadata = tokio::fs::metadata(&path)
                    .await
                    .map_err(|source| DocTranslateError::Extraction {
                        file_name: name.clone(),
                        source,
                    })?;
                let declared_kind = declared_kind
                    .unwrap_or_else(|| infer_kind(&path).to_owned());
                debug!(file = %name, kind = %declared_kind, size = metadata.len(), "normalising browsed file");
                Ok(Self {
                    name,
                    byte_size: metadata.len(),
                    declared_kind,
                    content: FileContent::Disk(path),
                })
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    /// MIME-like type reported by the selection surface; may be empty.
    pub fn declared_kind(&self) -> &str {
        &self.declared_kind
    }

    /// Lower-case extension of the file name, if it has one.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.name)
    }

    /// Read the raw content.
    ///
    /// Fails with `DocTranslateError::Extraction` naming this file when the
    /// underlying read fails.
    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        match &self.content {
            FileContent::Memory(bytes) => Ok(bytes.to_vec()),
            FileContent::Disk(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| DocTranslateError::Extraction {
                        file_name: self.name.clone(),
                        source,
                    })
            }
        }
    }
}

/// Whether the browse picker would offer a file with this name.
pub fn is_accepted_file_name(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
}

pub(crate) fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// MIME type for a path's extension; empty when unknown, matching what a
/// browser reports for unrecognised files.
fn infer_kind(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn dropped_file_keeps_bytes() {
        let file = UploadedFile::from_selection(FileSelection::Dropped {
            name: "notes.txt".into(),
            declared_kind: "text/plain".into(),
            bytes: b"hello world".to_vec(),
        })
        .await
        .unwrap();

        assert_eq!(file.name(), "notes.txt");
        assert_eq!(file.byte_size(), 11);
        assert_eq!(file.read_bytes().await.unwrap(), b"hello world");
    }

    #[tokio::test]
    async fn browsed_file_infers_kind_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Scan.PNG");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0x89, b'P', b'N', b'G'])
            .unwrap();

        let file = UploadedFile::from_selection(FileSelection::Browsed {
            path,
            declared_kind: None,
        })
        .await
        .unwrap();

        assert_eq!(file.name(), "Scan.PNG");
        assert_eq!(file.declared_kind(), "image/png");
        assert_eq!(file.byte_size(), 4);
        assert_eq!(file.extension().as_deref(), Some("png"));
    }

    #[tokio::test]
    async fn explicit_kind_wins_over_inference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"x").unwrap();

        let file = UploadedFile::from_selection(FileSelection::Browsed {
            path,
            declared_kind: Some("text/plain".into()),
        })
        .await
        .unwrap();
        assert_eq!(file.declared_kind(), "text/plain");
    }

    #[tokio::test]
    async fn vanished_file_fails_with_its_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        let file = UploadedFile::from_selection(FileSelection::Browsed {
            path: path.clone(),
            declared_kind: None,
        })
        .await
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        let err = file.read_bytes().await.unwrap_err();
        assert_eq!(err.file_name(), Some("notes.txt"));
    }

    #[tokio::test]
    async fn missing_path_is_rejected_at_selection() {
        let dir = tempfile::tempdir().unwrap();
        let result = UploadedFile::from_selection(FileSelection::Browsed {
            path: dir.path().join("nope.pdf"),
            declared_kind: None,
        })
        .await;
        assert!(matches!(result, Err(DocTranslateError::Extraction { .. })));
    }

    #[test]
    fn accepted_extensions() {
        assert!(is_accepted_file_name("report.PDF"));
        assert!(is_accepted_file_name("letter.docx"));
        assert!(!is_accepted_file_name("sheet.xlsx"));
        assert!(!is_accepted_file_name("README"));
    }
}
