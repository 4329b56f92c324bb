// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Collaborator-side checks for an [`Environment`].
//!
//! The descriptor carries no validation of its own. Consumers that load a
//! descriptor from outside the binary (see [`crate::file::load`]) run these
//! checks before handing values to the API client or identity provider.

use url::{Host, Url};

use crate::environment::Environment;
use crate::error::{ConfigError, ConfigResult};
use crate::identity::TENANT_SUFFIX;

/// Check that every field is present and consistent with the descriptor's
/// deployment target.
pub fn validate(env: &Environment) -> ConfigResult<()> {
    require_non_empty("apiServerUrl", &env.api_server_url)?;
    require_non_empty("auth0.url", &env.auth0.domain)?;
    require_non_empty("auth0.audience", &env.auth0.audience)?;
    require_non_empty("auth0.clientId", &env.auth0.client_id)?;
    require_non_empty("auth0.callbackURL", &env.auth0.callback_url)?;

    let api = parse_http_url("apiServerUrl", &env.api_server_url)?;
    let callback = parse_http_url("auth0.callbackURL", &env.auth0.callback_url)?;

    validate_domain(&env.auth0.domain)?;

    if env.production {
        require_https("apiServerUrl", &api)?;
        require_https("auth0.callbackURL", &callback)?;
    } else if !is_local(&callback) {
        return Err(ConfigError::SchemeMismatch {
            field: "auth0.callbackURL",
            reason: "development callback must point at localhost or a loopback address",
        });
    }

    Ok(())
}

fn require_non_empty(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(())
}

/// Parse an absolute http(s) URL with a host.
pub(crate) fn parse_http_url(field: &'static str, value: &str) -> ConfigResult<Url> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::UnsupportedScheme {
                field,
                scheme: other.to_string(),
            })
        }
    }

    if url.host().is_none() {
        return Err(ConfigError::MissingHost(field));
    }

    Ok(url)
}

/// The tenant domain is interpolated into `https://{domain}.auth0.com`, so
/// it must be a bare hostname fragment that yields exactly that host.
pub(crate) fn validate_domain(domain: &str) -> ConfigResult<()> {
    let invalid = || ConfigError::InvalidDomain(domain.to_string());

    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    if !matches!(Host::parse(domain), Ok(Host::Domain(_))) {
        return Err(invalid());
    }

    let tenant = format!("{domain}.{TENANT_SUFFIX}");
    let url = Url::parse(&format!("https://{tenant}/")).map_err(|_| invalid())?;
    match url.host_str() {
        Some(host) if host.eq_ignore_ascii_case(&tenant) => Ok(()),
        _ => Err(invalid()),
    }
}

fn require_https(field: &'static str, url: &Url) -> ConfigResult<()> {
    if url.scheme() != "https" {
        return Err(ConfigError::SchemeMismatch {
            field,
            reason: "production URLs must use https",
        });
    }
    Ok(())
}

fn is_local(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(name)) => name.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(addr)) => addr.is_loopback(),
        Some(Host::Ipv6(addr)) => addr.is_loopback(),
        None => false,
    }
}
