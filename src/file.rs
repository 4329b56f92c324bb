// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Reading and writing descriptors as JSON config files.
//!
//! Saved files use the client's key names, so a descriptor can be written
//! here and bundled with the client as-is. [`load`] validates what it reads;
//! [`from_json_str`] only parses.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::environment::Environment;
use crate::error::{ConfigError, ConfigResult};
use crate::validate::validate;

/// Parse a descriptor from JSON text.
pub fn from_json_str(json: &str) -> ConfigResult<Environment> {
    Ok(serde_json::from_str(json)?)
}

/// Render a descriptor as pretty-printed JSON.
pub fn to_json_string(env: &Environment) -> ConfigResult<String> {
    Ok(serde_json::to_string_pretty(env)?)
}

/// Load and validate a descriptor from a JSON file.
pub fn load(path: impl AsRef<Path>) -> ConfigResult<Environment> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let env = from_json_str(&json)?;
    validate(&env)?;

    info!(
        path = %path.display(),
        production = env.production,
        "Loaded environment descriptor"
    );

    Ok(env)
}

/// Write a descriptor to a JSON file (atomic write via rename).
///
/// The contents go to a uniquely named temporary file in the target
/// directory first; it is removed if any step before the rename fails.
pub fn save(env: &Environment, path: impl AsRef<Path>) -> ConfigResult<()> {
    let path = path.as_ref();
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut json = serde_json::to_vec_pretty(env)?;
    json.push(b'\n');

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(io_err)?;
            parent
        }
        None => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(io_err)?;
    temp.write_all(&json).map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    temp.persist(path).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), "Saved environment descriptor");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use tempfile::tempdir;

    use super::*;
    use crate::environment::{DEVELOPMENT, PRODUCTION};

    #[test]
    fn save_then_load_is_field_for_field_equal() {
        let dir = tempdir().unwrap();

        for variant in [&DEVELOPMENT, &PRODUCTION] {
            let path = dir.path().join("environment.json");
            save(variant, &path).unwrap();
            let loaded = load(&path).unwrap();
            assert_eq!(&loaded, variant);
        }
    }

    #[test]
    fn saved_file_uses_client_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("environment.json");
        save(&DEVELOPMENT, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.contains(r#""apiServerUrl": "http://127.0.0.1:5000""#));
        assert!(text.contains(r#""callbackURL": "http://localhost:8100""#));
        assert_eq!(fs::read_dir(dir.path().join("nested")).unwrap().count(), 1);
    }

    #[test]
    fn scenario_consumer_reads_exact_values() {
        let json = to_json_string(&DEVELOPMENT).unwrap();
        let env = from_json_str(&json).unwrap();
        assert_eq!(env.api_server_url, "http://127.0.0.1:5000");
        assert_eq!(env.auth0.client_id, "eh2R918NH6DFvIAeEcVZtXnKJcLWrnyi");
    }

    #[test]
    fn failed_save_is_io_error_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("environment.json");
        fs::create_dir(&target).unwrap();

        let err = save(&DEVELOPMENT, &target).unwrap_err();
        assert_eq!(err.error_code(), "io_error");

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("environment.json")]);
    }

    #[test]
    fn save_leaves_sibling_tmp_file_alone() {
        let dir = tempdir().unwrap();
        let sibling = dir.path().join("environment.tmp");
        fs::write(&sibling, "keep me").unwrap();

        save(&DEVELOPMENT, dir.path().join("environment.json")).unwrap();
        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("environment.json");
        fs::write(&path, "{ \"production\": false,").unwrap();
        let err = load(&path).unwrap_err();
        assert_eq!(err.error_code(), "parse_error");
    }

    #[test]
    fn load_validates_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("environment.json");

        let mut env = DEVELOPMENT.clone();
        env.auth0.audience = Cow::Borrowed("");
        save(&env, &path).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("auth0.audience")));
    }
}
