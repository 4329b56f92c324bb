// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Environment Descriptor
//!
//! Deployment-specific settings for the coffee shop client: the backend API
//! base URL and the identity-provider registration the client logs in with.
//!
//! Two variants are compiled in. The `production` cargo feature selects
//! [`PRODUCTION`]; without it [`DEVELOPMENT`] is active. A build carries
//! exactly one active variant, returned by [`environment`], and it is never
//! mutated for the lifetime of the process.
//!
//! ## Wire format
//!
//! Field names follow the client's configuration keys (`apiServerUrl`,
//! `auth0.clientId`, `auth0.callbackURL`, ...) so that a descriptor written
//! with [`crate::file::save`] can be handed to the client unchanged.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Environment settings for one deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Environment {
    /// Build/runtime mode switch
    pub production: bool,

    /// Base URL of the backend API server
    pub api_server_url: Cow<'static, str>,

    /// Identity-provider registration
    pub auth0: Auth0Settings,
}

/// Identity-provider settings of the registered client application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Settings {
    /// Tenant domain prefix (the part before `.auth0.com`)
    #[serde(rename = "url", alias = "domain")]
    pub domain: Cow<'static, str>,

    /// Audience the issued access tokens are meant for
    pub audience: Cow<'static, str>,

    /// Public identifier of the registered client
    #[serde(rename = "clientId")]
    pub client_id: Cow<'static, str>,

    /// Where the identity provider redirects after authentication
    #[serde(rename = "callbackURL")]
    pub callback_url: Cow<'static, str>,
}

/// Local development: API on loopback, client served by the dev server.
pub const DEVELOPMENT: Environment = Environment {
    production: false,
    api_server_url: Cow::Borrowed("http://127.0.0.1:5000"),
    auth0: Auth0Settings {
        domain: Cow::Borrowed("fsnd-ritterjul.eu"),
        audience: Cow::Borrowed("coffee"),
        client_id: Cow::Borrowed("eh2R918NH6DFvIAeEcVZtXnKJcLWrnyi"),
        callback_url: Cow::Borrowed("http://localhost:8100"),
    },
};

/// Hosted deployment. Shares the tenant and client registration with
/// development; API and client are served over HTTPS.
pub const PRODUCTION: Environment = Environment {
    production: true,
    api_server_url: Cow::Borrowed("https://coffee-shop-backend.herokuapp.com"),
    auth0: Auth0Settings {
        domain: Cow::Borrowed("fsnd-ritterjul.eu"),
        audience: Cow::Borrowed("coffee"),
        client_id: Cow::Borrowed("eh2R918NH6DFvIAeEcVZtXnKJcLWrnyi"),
        callback_url: Cow::Borrowed("https://coffee-shop-frontend.herokuapp.com"),
    },
};

#[cfg(not(feature = "production"))]
static ACTIVE: Environment = DEVELOPMENT;

#[cfg(feature = "production")]
static ACTIVE: Environment = PRODUCTION;

/// The descriptor selected for this build.
pub fn environment() -> &'static Environment {
    &ACTIVE
}
