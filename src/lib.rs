// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coffee Shop Environment - deployment descriptor for the coffee shop client
//!
//! This crate provides the build-time selected settings the client needs at
//! startup: the backend API base URL and the identity-provider registration.
//!
//! ## Modules
//!
//! - `config` - Cargo feature and logging variable reference
//! - `environment` - The descriptor type and its compiled-in variants
//! - `error` - `ConfigError` taxonomy shared by file, validation and identity helpers
//! - `file` - JSON config file load/save
//! - `validate` - Field and URL checks for loaded descriptors
//! - `identity` - Identity-provider endpoints (issuer, JWKS, login URL)

pub mod config;
pub mod environment;
pub mod error;
pub mod file;
pub mod identity;
pub mod validate;

pub use environment::{environment, Auth0Settings, Environment, DEVELOPMENT, PRODUCTION};
pub use error::{ConfigError, ConfigResult};
