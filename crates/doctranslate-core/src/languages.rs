// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Language catalog — the fixed, ordered list of languages offered in the
// source and target pickers.
//
// The catalog is a process-wide static. Lookups never fail: an unknown code
// resolves to itself so callers can always render something.

use serde::Serialize;

/// Sentinel source code meaning "detect the source language".
pub const AUTO_DETECT: &str = "auto";

/// One selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    /// Short identifier, e.g. `"es"`, or the `"auto"` sentinel.
    pub code: &'static str,
    /// Human-readable name, optionally followed by the native script.
    pub display_name: &'static str,
}

const fn entry(code: &'static str, display_name: &'static str) -> LanguageEntry {
    LanguageEntry { code, display_name }
}

/// Every known language. `auto` must stay first: source pickers list it at
/// the top and target pickers skip exactly that entry.
static CATALOG: &[LanguageEntry] = &[
    entry(AUTO_DETECT, "Auto-detect"),
    entry("en", "English"),
    entry("es", "Spanish"),
    entry("fr", "French"),
    entry("de", "German"),
    entry("it", "Italian"),
    entry("pt", "Portuguese"),
    entry("ru", "Russian"),
    entry("ja", "Japanese"),
    entry("ko", "Korean"),
    entry("zh", "Chinese"),
    entry("ar", "Arabic"),
    entry("hi", "Hindi (हिन्दी)"),
    entry("bn", "Bengali (বাংলা)"),
    entry("ta", "Tamil (தமிழ்)"),
    entry("te", "Telugu (తెలుగు)"),
    entry("ml", "Malayalam (മലയാളം)"),
    entry("or", "Odia (ଓଡ଼ିଆ)"),
];

/// Display name for `code`, or `code` itself when it is not in the catalog.
pub fn lookup(code: &str) -> &str {
    CATALOG
        .iter()
        .find(|e| e.code == code)
        .map(|e| e.display_name)
        .unwrap_or(code)
}

/// Languages offered as a translation source, `auto` first.
pub fn list_sources() -> &'static [LanguageEntry] {
    CATALOG
}

/// Languages offered as a translation target. Never contains `auto`.
pub fn list_targets() -> impl Iterator<Item = &'static LanguageEntry> {
    CATALOG.iter().filter(|e| e.code != AUTO_DETECT)
}

/// Whether `code` appears in the catalog at all.
pub fn is_known(code: &str) -> bool {
    CATALOG.iter().any(|e| e.code == code)
}

/// Whether `code` may be used as a translation target.
pub fn is_valid_target(code: &str) -> bool {
    code != AUTO_DETECT && is_known(code)
}
