// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DocTranslate application layer.
//
// `Workflow` is the single owner of the upload, the current stage and the
// translated text. Stages talk to it through its transition API or, for
// skip-ahead requests, through the shortcut channel. `services` runs the
// extraction + translation pipeline and keeps configuration on disk.

pub mod edit_buffer;
pub mod services;
pub mod shortcuts;
pub mod workflow;

pub use edit_buffer::EditBuffer;
pub use services::translation::{TranslationOutcome, TranslationService};
pub use shortcuts::{ShortcutDispatcher, ShortcutInbox};
pub use workflow::{DownloadSnapshot, StepView, TranslationRequest, Workflow};
