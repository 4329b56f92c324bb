// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Errors raised while loading, saving, or checking an environment descriptor.
//!
//! The compiled-in descriptors never produce these; they surface only when a
//! descriptor comes from a config file or a collaborator validates one.

use std::io;
use std::path::PathBuf;

/// Error type for descriptor file and validation operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a well-formed descriptor
    #[error("Invalid environment JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field is empty (wire key path, e.g. `auth0.clientId`)
    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// A URL field does not parse
    #[error("Field `{field}` is not a valid URL: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// A URL field uses something other than http/https
    #[error("Field `{field}` uses unsupported scheme `{scheme}` (expected http or https)")]
    UnsupportedScheme { field: &'static str, scheme: String },

    /// A URL field has no host component
    #[error("Field `{0}` has no host")]
    MissingHost(&'static str),

    /// The identity-provider domain is not a bare tenant prefix
    #[error("Identity provider domain `{0}` must be a bare tenant name without scheme or path")]
    InvalidDomain(String),

    /// A URL is inconsistent with the descriptor's deployment target
    #[error("Field `{field}` does not match the deployment target: {reason}")]
    SchemeMismatch {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    /// Get the stable error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "io_error",
            ConfigError::Parse(_) => "parse_error",
            ConfigError::EmptyField(_) => "empty_field",
            ConfigError::InvalidUrl { .. } => "invalid_url",
            ConfigError::UnsupportedScheme { .. } => "unsupported_scheme",
            ConfigError::MissingHost(_) => "missing_host",
            ConfigError::InvalidDomain(_) => "invalid_domain",
            ConfigError::SchemeMismatch { .. } => "scheme_mismatch",
        }
    }
}

/// Result type for descriptor operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
