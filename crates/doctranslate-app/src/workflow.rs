// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Workflow state machine. The single owner of the current stage, the
// uploaded file and the translated content.
//
// Transition table:
//
//   Upload    -> Translate   proceed, file present
//   Upload    -> Edit        SkipToEdit, file present
//   Translate -> Edit        proceed, a translation completed
//   Translate -> Download    SkipToDownload, file present
//   Edit      -> Download    proceed or SkipToDownload, always
//   any       -> earlier     navigate_to, always
//   any       -> later       navigate_to, when the previous stage is completed
//
// Rejected requests are no-ops. No stage entry has side effects; extraction
// and translation only run when the Translate stage triggers them.

use doctranslate_core::error::{DocTranslateError, Result};
use doctranslate_core::languages::{self, AUTO_DETECT};
use doctranslate_core::{AppConfig, ExportFormat, Shortcut, Stage, TranslationSession};
use doctranslate_document::UploadedFile;
use tracing::{debug, info, warn};

use crate::edit_buffer::EditBuffer;
use crate::shortcuts::{self, ShortcutDispatcher, ShortcutInbox};

/// Owned snapshot of everything one translate attempt needs.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub file: UploadedFile,
    pub source_lang: String,
    pub target_lang: String,
    upload_generation: u64,
    /// Set only on requests handed out by `begin_translation`.
    attempt: Option<u64>,
}

/// One entry of the navigation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub stage: Stage,
    pub label: &'static str,
    pub completed: bool,
    pub active: bool,
    pub clickable: bool,
}

/// Read-only view handed to export sinks on the Download stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSnapshot {
    pub file_name: Option<String>,
    pub target_lang: String,
    pub text: String,
}

impl DownloadSnapshot {
    pub fn formats(&self) -> &'static [ExportFormat] {
        &ExportFormat::ALL
    }
}

#[derive(Debug)]
pub struct Workflow {
    stage: Stage,
    file: Option<UploadedFile>,
    content: EditBuffer,
    source_lang: String,
    target_lang: String,
    /// Bumped on every upload or removal; stale translations are discarded.
    upload_generation: u64,
    translation_complete: bool,
    edit_visited: bool,
    /// Attempt id of the gated translation currently running.
    in_flight: Option<u64>,
    attempts: u64,
    dispatcher: ShortcutDispatcher,
    inbox: ShortcutInbox,
}

impl Workflow {
    /// Fresh workflow on the Upload stage with the configured languages.
    /// An invalid configured target falls back to English.
    pub fn new(config: &AppConfig) -> Self {
        let (dispatcher, inbox) = shortcuts::channel();
        let target_lang = if languages::is_valid_target(&config.default_target_language) {
            config.default_target_language.clone()
        } else {
            warn!(
                target = %config.default_target_language,
                "configured target language is not usable, falling back to English"
            );
            "en".to_owned()
        };

        Self {
            stage: Stage::Upload,
            file: None,
            content: EditBuffer::new(),
            source_lang: config.default_source_language.clone(),
            target_lang,
            upload_generation: 0,
            translation_complete: false,
            edit_visited: false,
            in_flight: None,
            attempts: 0,
            dispatcher,
            inbox,
        }
    }

    // -- Observable state ----------------------------------------------------

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    /// Current translated content, including any edits.
    pub fn translated_text(&self) -> &str {
        self.content.text()
    }

    pub fn source_language(&self) -> &str {
        &self.source_lang
    }

    pub fn target_language(&self) -> &str {
        &self.target_lang
    }

    /// A dispatcher stages can use to request shortcut transitions.
    pub fn dispatcher(&self) -> ShortcutDispatcher {
        self.dispatcher.clone()
    }

    // -- Upload --------------------------------------------------------------

    /// Make `file` the active upload, replacing any previous one. Results
    /// derived from the previous file are discarded.
    pub fn upload(&mut self, file: UploadedFile) {
        info!(file = %file.name(), size = file.byte_size(), kind = %file.declared_kind(), "file uploaded");
        self.file = Some(file);
        self.reset_downstream();
    }

    /// Clear the active upload. The stage is left where it is.
    pub fn remove_file(&mut self) {
        if let Some(file) = self.file.take() {
            info!(file = %file.name(), "file removed");
            self.reset_downstream();
        }
    }

    fn reset_downstream(&mut self) {
        self.upload_generation += 1;
        self.translation_complete = false;
        self.edit_visited = false;
        self.content.clear();
    }

    // -- Languages -----------------------------------------------------------

    pub fn set_source_language(&mut self, code: impl Into<String>) {
        self.source_lang = code.into();
    }

    /// Fails for `"auto"`, which is only meaningful as a source.
    pub fn set_target_language(&mut self, code: impl Into<String>) -> Result<()> {
        let code = code.into();
        if code == AUTO_DETECT {
            return Err(DocTranslateError::InvalidTargetLanguage(code));
        }
        self.target_lang = code;
        Ok(())
    }

    // -- Transitions ---------------------------------------------------------

    /// Completion predicate for `stage`. Download is never complete.
    pub fn is_completed(&self, stage: Stage) -> bool {
        match stage {
            Stage::Upload => self.file.is_some(),
            Stage::Translate => self.translation_complete,
            Stage::Edit => self.edit_visited,
            Stage::Download => false,
        }
    }

    /// Whether the navigation surface may jump straight to `stage`.
    pub fn is_clickable(&self, stage: Stage) -> bool {
        match stage.index() {
            0 => true,
            i => self.is_completed(Stage::ALL[i - 1]),
        }
    }

    /// Whether `proceed` would move forward from the current stage.
    pub fn can_proceed(&self) -> bool {
        match self.stage {
            Stage::Upload => self.file.is_some(),
            Stage::Translate => self.translation_complete,
            Stage::Edit => true,
            Stage::Download => false,
        }
    }

    /// Linear forward step. Returns whether the stage changed.
    pub fn proceed(&mut self) -> bool {
        if !self.can_proceed() {
            debug!(stage = %self.stage, "proceed rejected");
            return false;
        }
        match self.stage.next() {
            Some(next) => {
                self.enter(next);
                true
            }
            None => false,
        }
    }

    /// Direct navigation. Backward always succeeds; forward only onto a
    /// clickable stage. Returns whether the request was accepted.
    pub fn navigate_to(&mut self, target: Stage) -> bool {
        if target <= self.stage || self.is_clickable(target) {
            if target != self.stage {
                self.enter(target);
            }
            true
        } else {
            debug!(from = %self.stage, to = %target, "navigation to uncompleted stage ignored");
            false
        }
    }

    /// Apply one shortcut if its precondition holds. Returns whether the
    /// stage changed.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) -> bool {
        let allowed = match (shortcut, self.stage) {
            (Shortcut::SkipToEdit, Stage::Upload) => self.file.is_some(),
            (Shortcut::SkipToDownload, Stage::Translate) => self.file.is_some(),
            (Shortcut::SkipToDownload, Stage::Edit) => true,
            _ => false,
        };
        if allowed {
            info!(?shortcut, from = %self.stage, "shortcut accepted");
            self.enter(shortcut.destination());
        } else {
            debug!(?shortcut, stage = %self.stage, "shortcut ignored");
        }
        allowed
    }

    /// Apply every pending shortcut in emission order. Returns how many
    /// changed the stage.
    pub fn drain_shortcuts(&mut self) -> usize {
        let mut applied = 0;
        while let Some(shortcut) = self.inbox.try_next() {
            if self.apply_shortcut(shortcut) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next shortcut and apply it. Returns the shortcut and
    /// whether it changed the stage.
    ///
    /// The workflow keeps a dispatcher of its own, so this waits until a
    /// signal arrives.
    pub async fn next_shortcut(&mut self) -> Option<(Shortcut, bool)> {
        let shortcut = self.inbox.next().await?;
        let applied = self.apply_shortcut(shortcut);
        Some((shortcut, applied))
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = %self.stage, to = %stage, "stage change");
        self.stage = stage;
        if stage == Stage::Edit {
            self.edit_visited = true;
        }
    }

    // -- Translation ---------------------------------------------------------

    /// Whether the Translate trigger should be enabled.
    pub fn translate_enabled(&self) -> bool {
        self.file.is_some() && self.in_flight.is_none()
    }

    pub fn translation_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Snapshot of what a translate attempt needs, without gating.
    pub fn translation_request(&self) -> Result<TranslationRequest> {
        let file = self.file.clone().ok_or(DocTranslateError::NoDocument)?;
        Ok(TranslationRequest {
            file,
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
            upload_generation: self.upload_generation,
            attempt: None,
        })
    }

    /// Disable the trigger and hand out a request. Fails while another
    /// attempt is still running.
    pub fn begin_translation(&mut self) -> Result<TranslationRequest> {
        if self.in_flight.is_some() {
            return Err(DocTranslateError::TranslationInFlight);
        }
        let mut request = self.translation_request()?;
        self.attempts += 1;
        request.attempt = Some(self.attempts);
        self.in_flight = request.attempt;
        Ok(request)
    }

    /// Take the result of an attempt. The trigger is re-enabled only when
    /// `request` is the one `begin_translation` handed out.
    ///
    /// A completed session replaces the translated content. A failed one
    /// changes nothing. Sessions started for an earlier upload are dropped.
    /// Returns whether the content was replaced.
    pub fn finish_translation(
        &mut self,
        request: &TranslationRequest,
        session: &TranslationSession,
    ) -> bool {
        if request.attempt.is_some() && request.attempt == self.in_flight {
            self.in_flight = None;
        }

        if request.upload_generation != self.upload_generation {
            warn!(session = %session.id, "discarding translation for a replaced upload");
            return false;
        }
        if !session.is_complete() {
            debug!(session = %session.id, status = ?session.status, "translation not applied");
            return false;
        }

        self.content.replace(session.translated_text.clone());
        self.translation_complete = true;
        info!(session = %session.id, target = %session.target_lang, "translation applied");
        true
    }

    // -- Edit ----------------------------------------------------------------

    /// Write an edit back into the translated content.
    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.content.edit(text.into());
    }

    pub fn undo_edit(&mut self) -> bool {
        self.content.undo()
    }

    pub fn redo_edit(&mut self) -> bool {
        self.content.redo()
    }

    // -- Download ------------------------------------------------------------

    pub fn download_snapshot(&self) -> DownloadSnapshot {
        DownloadSnapshot {
            file_name: self.file.as_ref().map(|f| f.name().to_owned()),
            target_lang: self.target_lang.clone(),
            text: self.content.text().to_owned(),
        }
    }

    // -- Navigation surface --------------------------------------------------

    pub fn steps(&self) -> Vec<StepView> {
        Stage::ALL
            .iter()
            .map(|&stage| StepView {
                stage,
                label: stage.label(),
                completed: self.is_completed(stage),
                active: stage == self.stage,
                clickable: self.is_clickable(stage),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctranslate_core::SessionStatus;

    fn workflow() -> Workflow {
        Workflow::new(&AppConfig::default())
    }

    fn notes() -> UploadedFile {
        UploadedFile::from_bytes("notes.txt", "text/plain", "hello world")
    }

    fn completed(request: &TranslationRequest, text: &str) -> TranslationSession {
        let mut session = TranslationSession::new(&request.source_lang, &request.target_lang);
        session.start();
        session.complete(text.into());
        session
    }

    fn failed(request: &TranslationRequest) -> TranslationSession {
        let mut session = TranslationSession::new(&request.source_lang, &request.target_lang);
        session.start();
        session.fail("boom");
        session
    }

    #[test]
    fn starts_on_upload_with_defaults() {
        let wf = workflow();
        assert_eq!(wf.stage(), Stage::Upload);
        assert!(wf.uploaded_file().is_none());
        assert_eq!(wf.source_language(), "auto");
        assert_eq!(wf.target_language(), "en");
        assert!(wf.translated_text().is_empty());
    }

    #[test]
    fn proceed_from_upload_needs_a_file() {
        let mut wf = workflow();
        assert!(!wf.proceed());
        assert_eq!(wf.stage(), Stage::Upload);

        wf.upload(notes());
        assert!(wf.proceed());
        assert_eq!(wf.stage(), Stage::Translate);
    }

    #[test]
    fn entering_translate_does_not_translate() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.proceed();
        assert!(wf.translated_text().is_empty());
        assert!(!wf.is_completed(Stage::Translate));
        assert!(!wf.proceed());
    }

    #[test]
    fn full_linear_progression() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.proceed();
        let request = wf.begin_translation().unwrap();
        assert!(wf.finish_translation(&request, &completed(&request, "Hola world")));
        assert!(wf.proceed());
        assert_eq!(wf.stage(), Stage::Edit);
        assert!(wf.proceed());
        assert_eq!(wf.stage(), Stage::Download);
        assert!(!wf.proceed());
        assert_eq!(wf.translated_text(), "Hola world");
    }

    #[test]
    fn skip_to_edit_from_upload() {
        let mut wf = workflow();
        let shortcuts = wf.dispatcher();
        shortcuts.skip_to_edit();
        assert_eq!(wf.drain_shortcuts(), 0);
        assert_eq!(wf.stage(), Stage::Upload);

        wf.upload(notes());
        shortcuts.skip_to_edit();
        assert_eq!(wf.drain_shortcuts(), 1);
        assert_eq!(wf.stage(), Stage::Edit);
        assert!(wf.translated_text().is_empty());
    }

    #[test]
    fn skip_to_download_from_translate_with_empty_text() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.proceed();
        wf.dispatcher().skip_to_download();
        wf.drain_shortcuts();
        assert_eq!(wf.stage(), Stage::Download);
        assert!(wf.translated_text().is_empty());
        assert!(wf.download_snapshot().text.is_empty());
    }

    #[test]
    fn shortcuts_ignored_in_wrong_stage() {
        let mut wf = workflow();
        wf.upload(notes());
        assert!(!wf.apply_shortcut(Shortcut::SkipToDownload));
        wf.proceed();
        assert!(!wf.apply_shortcut(Shortcut::SkipToEdit));
        assert_eq!(wf.stage(), Stage::Translate);
    }

    #[test]
    fn shortcuts_apply_in_emission_order() {
        let mut wf = workflow();
        wf.upload(notes());
        let shortcuts = wf.dispatcher();
        shortcuts.skip_to_edit();
        shortcuts.skip_to_download();
        assert_eq!(wf.drain_shortcuts(), 2);
        assert_eq!(wf.stage(), Stage::Download);
    }

    #[tokio::test]
    async fn next_shortcut_waits_and_applies() {
        let mut wf = workflow();
        wf.upload(notes());
        let shortcuts = wf.dispatcher();
        tokio::spawn(async move { shortcuts.skip_to_edit() });
        assert_eq!(wf.next_shortcut().await, Some((Shortcut::SkipToEdit, true)));
        assert_eq!(wf.stage(), Stage::Edit);
    }

    #[test]
    fn backward_navigation_always_allowed() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.apply_shortcut(Shortcut::SkipToEdit);
        assert!(wf.navigate_to(Stage::Upload));
        assert_eq!(wf.stage(), Stage::Upload);
    }

    #[test]
    fn forward_navigation_needs_previous_stage_completed() {
        let mut wf = workflow();
        assert!(!wf.navigate_to(Stage::Translate));
        wf.upload(notes());
        assert!(!wf.navigate_to(Stage::Edit));
        assert_eq!(wf.stage(), Stage::Upload);
        assert!(wf.navigate_to(Stage::Translate));

        // Visiting Edit through the shortcut makes Download reachable.
        wf.navigate_to(Stage::Upload);
        wf.apply_shortcut(Shortcut::SkipToEdit);
        wf.navigate_to(Stage::Upload);
        assert!(wf.navigate_to(Stage::Download));
        assert_eq!(wf.stage(), Stage::Download);
    }

    #[test]
    fn download_is_revisitable() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.apply_shortcut(Shortcut::SkipToEdit);
        wf.proceed();
        assert!(wf.navigate_to(Stage::Edit));
        assert!(wf.navigate_to(Stage::Download));
    }

    #[test]
    fn auto_target_is_rejected() {
        let mut wf = workflow();
        assert!(wf.set_target_language("auto").is_err());
        assert_eq!(wf.target_language(), "en");
        wf.set_target_language("es").unwrap();
        wf.set_source_language("auto");
        assert_eq!(wf.target_language(), "es");
    }

    #[test]
    fn invalid_configured_target_falls_back() {
        let config = AppConfig {
            default_target_language: "auto".into(),
            ..AppConfig::default()
        };
        assert_eq!(Workflow::new(&config).target_language(), "en");
    }

    #[test]
    fn trigger_is_gated_while_in_flight() {
        let mut wf = workflow();
        assert!(!wf.translate_enabled());
        assert!(matches!(wf.begin_translation(), Err(DocTranslateError::NoDocument)));

        wf.upload(notes());
        assert!(wf.translate_enabled());
        let request = wf.begin_translation().unwrap();
        assert!(!wf.translate_enabled());
        assert!(matches!(
            wf.begin_translation(),
            Err(DocTranslateError::TranslationInFlight)
        ));

        wf.finish_translation(&request, &failed(&request));
        assert!(wf.translate_enabled());
    }

    #[test]
    fn ungated_request_does_not_release_the_trigger() {
        let mut wf = workflow();
        wf.upload(notes());
        let gated = wf.begin_translation().unwrap();
        let side = wf.translation_request().unwrap();

        wf.finish_translation(&side, &completed(&side, "side"));
        assert!(wf.translation_in_flight());
        assert!(!wf.translate_enabled());
        assert!(matches!(
            wf.begin_translation(),
            Err(DocTranslateError::TranslationInFlight)
        ));

        wf.finish_translation(&gated, &completed(&gated, "gated"));
        assert!(wf.translate_enabled());
        assert_eq!(wf.translated_text(), "gated");
    }

    #[test]
    fn failed_translation_changes_nothing() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.proceed();
        let first = wf.begin_translation().unwrap();
        wf.finish_translation(&first, &completed(&first, "Hola world"));

        let second = wf.begin_translation().unwrap();
        let session = failed(&second);
        assert_eq!(session.status, SessionStatus::Failed);
        assert!(!wf.finish_translation(&second, &session));
        assert_eq!(wf.stage(), Stage::Translate);
        assert_eq!(wf.translated_text(), "Hola world");
        assert_eq!(wf.uploaded_file().map(|f| f.name()), Some("notes.txt"));
    }

    #[test]
    fn last_completed_session_wins() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.proceed();
        let a = wf.translation_request().unwrap();
        let b = wf.translation_request().unwrap();
        wf.finish_translation(&b, &completed(&b, "second"));
        wf.finish_translation(&a, &completed(&a, "first"));
        assert_eq!(wf.translated_text(), "first");
    }

    #[test]
    fn reupload_discards_stale_results() {
        let mut wf = workflow();
        wf.upload(notes());
        let request = wf.begin_translation().unwrap();
        wf.upload(UploadedFile::from_bytes("other.txt", "text/plain", "bye"));
        assert!(!wf.finish_translation(&request, &completed(&request, "stale")));
        assert!(wf.translated_text().is_empty());
        assert!(wf.translate_enabled());
    }

    #[test]
    fn removal_clears_upload_but_keeps_stage() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.apply_shortcut(Shortcut::SkipToEdit);
        wf.remove_file();
        assert_eq!(wf.stage(), Stage::Edit);
        assert!(wf.uploaded_file().is_none());
        assert!(!wf.is_completed(Stage::Upload));
        assert_eq!(wf.download_snapshot().file_name, None);
    }

    #[test]
    fn edits_write_back_with_history() {
        let mut wf = workflow();
        wf.upload(notes());
        wf.proceed();
        let request = wf.begin_translation().unwrap();
        wf.finish_translation(&request, &completed(&request, "Hola world"));
        wf.proceed();

        wf.edit_text("Hola mundo");
        assert_eq!(wf.translated_text(), "Hola mundo");
        assert!(wf.undo_edit());
        assert_eq!(wf.translated_text(), "Hola world");
        assert!(wf.redo_edit());
        assert_eq!(wf.download_snapshot().text, "Hola mundo");
    }

    #[test]
    fn steps_reflect_progress() {
        let mut wf = workflow();
        let steps = wf.steps();
        assert_eq!(steps.len(), 4);
        assert!(steps[0].active && steps[0].clickable && !steps[0].completed);
        assert!(!steps[1].clickable);

        wf.upload(notes());
        let steps = wf.steps();
        assert!(steps[0].completed);
        assert!(steps[1].clickable);
        assert!(!steps[2].clickable);
        assert_eq!(steps[3].label, "Download Result");
    }

    #[test]
    fn snapshot_lists_export_formats() {
        let wf = workflow();
        let snapshot = wf.download_snapshot();
        assert_eq!(snapshot.formats()[0], ExportFormat::Pdf);
        assert_eq!(snapshot.target_lang, "en");
    }
}
