// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Build and Runtime Configuration Constants
//!
//! The environment descriptor itself is fixed at build time; the only switch
//! is a cargo feature. The `coffee-env` binary additionally reads the usual
//! logging variables.
//!
//! ## Cargo Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | *(none)* | Compiles in the development descriptor |
//! | `production` | Compiles in the production descriptor |
//!
//! ## Environment Variables (`coffee-env` only)
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Conventional file name for a saved descriptor.
pub const DEFAULT_FILE_NAME: &str = "environment.json";
