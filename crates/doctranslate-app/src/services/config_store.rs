// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Persisted configuration (`config.json` inside the data directory).

use std::path::Path;

use doctranslate_core::error::Result;
use doctranslate_core::AppConfig;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "config.json";

/// Load the persisted config, falling back to defaults when the file is
/// missing, unreadable, or holds unusable values.
pub fn load_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join(CONFIG_FILE);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) => {
            debug!(path = %path.display(), "no stored config: {e}");
            return AppConfig::default();
        }
    };

    let config: AppConfig = match serde_json::from_str(&data) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), "ignoring corrupt config: {e}");
            return AppConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!(path = %path.display(), "ignoring invalid config: {e}");
            AppConfig::default()
        }
    }
}

pub fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}
