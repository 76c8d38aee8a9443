// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-value storage backends.
//!
//! This module isolates backend-specific persistence code. The store itself
//! is backend-agnostic: each entity collection is serialized as one JSON
//! document and written under a namespaced key, full-collection overwrite on
//! every mutation.
//!
//! ## Backend Support
//!
//! - `memory` — in-process map (default for unit and integration tests)
//! - `file` — one JSON file per key inside a data directory (default for the
//!   CLI surface)
//!
//! Backends carry no transactional guarantee. The in-memory state is updated
//! before the write happens, so a crash between the two can leave the
//! persisted snapshot stale; the store reloads whatever snapshot survives and
//! falls back to seed data for keys that are missing or corrupt.

pub mod file;
pub mod memory;

use crate::error::StoreError;

/// A namespaced key-value backend holding one JSON document per key.
pub trait StorageBackend {
    /// Reads the document stored under `key`, or `None` if the key has never
    /// been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `payload` under `key`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;
}
