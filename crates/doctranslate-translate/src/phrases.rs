// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Phrase tables for the translation simulator.
//
// Each table maps a canonical lower-case English phrase to its localized
// form. Keys are disjoint whole phrases and no localized value contains a
// key, so applying a table twice gives the same result as applying it once.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Fixed vocabulary for one target language.
#[derive(Debug)]
pub struct PhraseTable {
    pub lang: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

static TABLES: &[PhraseTable] = &[
    PhraseTable {
        lang: "es",
        entries: &[
            ("good morning", "Buenos días"),
            ("how are you", "Cómo estás"),
            ("thank you", "Gracias"),
            ("welcome", "Bienvenido"),
            ("goodbye", "Adiós"),
            ("hello", "Hola"),
        ],
    },
    PhraseTable {
        lang: "fr",
        entries: &[
            ("good morning", "Bonjour"),
            ("how are you", "Comment allez-vous"),
            ("thank you", "Merci"),
            ("welcome", "Bienvenue"),
            ("goodbye", "Au revoir"),
            ("hello", "Bonjour"),
        ],
    },
    PhraseTable {
        lang: "de",
        entries: &[
            ("good morning", "Guten Morgen"),
            ("how are you", "Wie geht es dir"),
            ("thank you", "Danke"),
            ("welcome", "Willkommen"),
            ("goodbye", "Auf Wiedersehen"),
            ("hello", "Hallo"),
        ],
    },
    PhraseTable {
        lang: "it",
        entries: &[
            ("good morning", "Buongiorno"),
            ("how are you", "Come stai"),
            ("thank you", "Grazie"),
            ("welcome", "Benvenuto"),
            ("goodbye", "Arrivederci"),
            ("hello", "Ciao"),
        ],
    },
    PhraseTable {
        lang: "pt",
        entries: &[
            ("good morning", "Bom dia"),
            ("how are you", "Como vai você"),
            ("thank you", "Obrigado"),
            ("welcome", "Bem-vindo"),
            ("goodbye", "Adeus"),
            ("hello", "Olá"),
        ],
    },
    PhraseTable {
        lang: "hi",
        entries: &[
            ("good morning", "सुप्रभात"),
            ("how are you", "आप कैसे हैं"),
            ("thank you", "धन्यवाद"),
            ("welcome", "स्वागत है"),
            ("goodbye", "अलविदा"),
            ("hello", "नमस्ते"),
        ],
    },
];

/// One alternation per table, longest phrases first, matched
/// case-insensitively on word boundaries.
static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TABLES
        .iter()
        .map(|table| {
            let alternation = table
                .entries
                .iter()
                .map(|(key, _)| regex::escape(key))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)\b(?:{alternation})\b");
            let regex = Regex::new(&pattern).expect("phrase patterns are escaped literals");
            (table.lang, regex)
        })
        .collect()
});

/// Phrase table for `lang`, if the simulator has one.
pub fn table_for(lang: &str) -> Option<&'static PhraseTable> {
    TABLES.iter().find(|t| t.lang == lang)
}

/// Languages that have a phrase table.
pub fn languages_with_tables() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|t| t.lang)
}

impl PhraseTable {
    fn localize(&self, matched: &str) -> Option<&'static str> {
        let key = matched.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Replace every whole-phrase occurrence of every key in `text`.
    /// Everything else is left untouched.
    pub fn apply(&self, text: &str) -> String {
        let Some((_, regex)) = PATTERNS.iter().find(|(lang, _)| *lang == self.lang) else {
            return text.to_owned();
        };
        regex
            .replace_all(text, |caps: &Captures<'_>| {
                let matched = &caps[0];
                self.localize(matched).unwrap_or(matched).to_owned()
            })
            .into_owned()
    }
}
