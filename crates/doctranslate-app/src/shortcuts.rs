// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stage shortcut channel.
//
// Stages hold a cloned `ShortcutDispatcher` and emit skip-ahead requests
// without knowing anything about the workflow. The workflow owns the single
// `ShortcutInbox` and decides whether each request is legal. Signals are
// delivered in emission order.

use doctranslate_core::Shortcut;
use tokio::sync::mpsc;
use tracing::debug;

/// Create a connected dispatcher/inbox pair.
pub fn channel() -> (ShortcutDispatcher, ShortcutInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ShortcutDispatcher { tx }, ShortcutInbox { rx })
}

/// Sending half, cheap to clone and hand to any stage.
#[derive(Debug, Clone)]
pub struct ShortcutDispatcher {
    tx: mpsc::UnboundedSender<Shortcut>,
}

impl ShortcutDispatcher {
    /// Fire-and-forget. A signal sent after the workflow is gone is dropped.
    pub fn emit(&self, shortcut: Shortcut) {
        if self.tx.send(shortcut).is_err() {
            debug!(?shortcut, "shortcut emitted with no workflow listening");
        }
    }

    pub fn skip_to_edit(&self) {
        self.emit(Shortcut::SkipToEdit);
    }

    pub fn skip_to_download(&self) {
        self.emit(Shortcut::SkipToDownload);
    }
}

/// Receiving half, owned by the workflow.
#[derive(Debug)]
pub struct ShortcutInbox {
    rx: mpsc::UnboundedReceiver<Shortcut>,
}

impl ShortcutInbox {
    /// Next pending signal, without waiting.
    pub fn try_next(&mut self) -> Option<Shortcut> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next signal. `None` once every dispatcher is dropped.
    pub async fn next(&mut self) -> Option<Shortcut> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_arrive_in_emission_order() {
        let (dispatcher, mut inbox) = channel();
        let other = dispatcher.clone();
        dispatcher.skip_to_edit();
        other.skip_to_download();
        dispatcher.skip_to_edit();

        assert_eq!(inbox.try_next(), Some(Shortcut::SkipToEdit));
        assert_eq!(inbox.try_next(), Some(Shortcut::SkipToDownload));
        assert_eq!(inbox.try_next(), Some(Shortcut::SkipToEdit));
        assert_eq!(inbox.try_next(), None);
    }

    #[test]
    fn emitting_without_listener_is_silent() {
        let (dispatcher, inbox) = channel();
        drop(inbox);
        dispatcher.skip_to_download();
    }

    #[tokio::test]
    async fn next_ends_when_dispatchers_drop() {
        let (dispatcher, mut inbox) = channel();
        dispatcher.skip_to_download();
        drop(dispatcher);
        assert_eq!(inbox.next().await, Some(Shortcut::SkipToDownload));
        assert_eq!(inbox.next().await, None);
    }
}
