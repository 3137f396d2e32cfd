// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// doctranslate-translate — Translation backends for DocTranslate.
//
// Defines the `Translator` contract a real machine-translation service would
// satisfy, and ships a deterministic simulator: whole-phrase substitution for
// the languages that have a phrase table, and a banner-wrapped copy of the
// input for every other language.

pub mod engine;
pub mod phrases;

pub use engine::{SimulatedTranslator, Translator, fallback_translation, simulate};
pub use phrases::PhraseTable;
