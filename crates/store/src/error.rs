// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_dispatch::CoreError;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The command was rejected by the lifecycle manager. No state changed.
    Rejected(CoreError),
    /// Reading or writing the key-value backend failed.
    Io {
        /// The namespaced key involved.
        key: String,
        /// The underlying error message.
        message: String,
    },
    /// Serializing a collection for persistence failed.
    Serialization {
        /// The namespaced key involved.
        key: String,
        /// The underlying error message.
        message: String,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(err) => write!(f, "Command rejected: {err}"),
            Self::Io { key, message } => {
                write!(f, "Storage error for key '{key}': {message}")
            }
            Self::Serialization { key, message } => {
                write!(f, "Serialization error for key '{key}': {message}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        Self::Rejected(err)
    }
}
