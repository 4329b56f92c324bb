// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity-provider endpoints derived from [`Auth0Settings`].
//!
//! ## Auth Flow
//!
//! 1. Client redirects the user to [`login_url`] (implicit flow, `response_type=token`)
//! 2. Identity provider redirects back to `callbackURL` with the access token
//! 3. Client sends `Authorization: Bearer <token>` to `apiServerUrl`
//! 4. API verifies the token against [`jwks_url`], [`issuer`] and the audience

use url::Url;

use crate::environment::Auth0Settings;
use crate::error::ConfigResult;
use crate::validate::{parse_http_url, validate_domain};

/// Hosted tenant suffix appended to the domain prefix.
pub const TENANT_SUFFIX: &str = "auth0.com";

/// Hostname of the tenant, e.g. `fsnd-ritterjul.eu.auth0.com`.
pub fn tenant_host(auth0: &Auth0Settings) -> String {
    format!("{}.{TENANT_SUFFIX}", auth0.domain)
}

/// Expected `iss` claim of tokens issued by the tenant (trailing slash included).
pub fn issuer(auth0: &Auth0Settings) -> String {
    format!("https://{}/", tenant_host(auth0))
}

/// JWKS endpoint of the tenant.
pub fn jwks_url(auth0: &Auth0Settings) -> String {
    format!("https://{}/.well-known/jwks.json", tenant_host(auth0))
}

/// Authorization URL that starts the implicit login flow.
pub fn login_url(auth0: &Auth0Settings) -> ConfigResult<Url> {
    validate_domain(&auth0.domain)?;

    let authorize = format!("https://{}/authorize", tenant_host(auth0));
    let mut url = parse_http_url("auth0.url", &authorize)?;

    url.query_pairs_mut()
        .append_pair("audience", &auth0.audience)
        .append_pair("response_type", "token")
        .append_pair("client_id", &auth0.client_id)
        .append_pair("redirect_uri", &auth0.callback_url);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::environment::DEVELOPMENT;

    #[test]
    fn tenant_endpoints() {
        let auth0 = &DEVELOPMENT.auth0;
        assert_eq!(tenant_host(auth0), "fsnd-ritterjul.eu.auth0.com");
        assert_eq!(issuer(auth0), "https://fsnd-ritterjul.eu.auth0.com/");
        assert_eq!(
            jwks_url(auth0),
            "https://fsnd-ritterjul.eu.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn development_login_url() {
        let url = login_url(&DEVELOPMENT.auth0).unwrap();
        assert_eq!(
            url.as_str(),
            "https://fsnd-ritterjul.eu.auth0.com/authorize\
             ?audience=coffee\
             &response_type=token\
             &client_id=eh2R918NH6DFvIAeEcVZtXnKJcLWrnyi\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8100"
        );
    }

    #[test]
    fn login_url_round_trips_redirect() {
        let url = login_url(&DEVELOPMENT.auth0).unwrap();
        let redirect = url
            .query_pairs()
            .find(|(k, _)| k == "redirect_uri")
            .map(|(_, v)| v.into_owned());
        assert_eq!(redirect.as_deref(), Some("http://localhost:8100"));
    }

    #[test]
    fn login_url_rejects_unusable_domain() {
        let mut auth0 = DEVELOPMENT.auth0.clone();
        auth0.domain = Cow::Borrowed("bad domain");
        assert!(login_url(&auth0).is_err());
    }

    #[test]
    fn login_url_never_leaves_the_tenant() {
        for domain in ["evil.example#", "evil.example?", "evil.example:443@"] {
            let mut auth0 = DEVELOPMENT.auth0.clone();
            auth0.domain = Cow::Borrowed(domain);
            let err = login_url(&auth0).unwrap_err();
            assert_eq!(err.error_code(), "invalid_domain", "{domain}");
        }
    }
}
