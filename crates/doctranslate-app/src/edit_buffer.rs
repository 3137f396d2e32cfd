// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Translated-content buffer with undo/redo for the Edit stage.

use std::collections::VecDeque;

/// Oldest snapshots are dropped beyond this many undo steps.
pub const MAX_HISTORY: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    text: String,
    undo: VecDeque<String>,
    redo: Vec<String>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the content wholesale (a fresh translation) and forget history.
    pub fn replace(&mut self, text: String) {
        self.text = text;
        self.undo.clear();
        self.redo.clear();
    }

    /// Empty the buffer and forget history.
    pub fn clear(&mut self) {
        self.replace(String::new());
    }

    /// Record a user edit. Identical content is not an edit.
    pub fn edit(&mut self, text: String) {
        if text == self.text {
            return;
        }
        let previous = std::mem::replace(&mut self.text, text);
        if self.undo.len() == MAX_HISTORY {
            self.undo.pop_front();
        }
        self.undo.push_back(previous);
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo(&mut self) -> bool {
        match self.undo.pop_back() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.text, previous);
                self.redo.push(current);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.text, next);
                self.undo.push_back(current);
                true
            }
            None => false,
        }
    }
}
