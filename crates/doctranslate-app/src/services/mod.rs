// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — bridges the workflow to the extraction and translation
// backends and to the on-disk configuration.

pub mod config_store;
pub mod data_dir;
pub mod translation;
