use std::path::{Path, PathBuf};

use anyhow::Context;
use yatra_config::Config;

/// Profile picked up from the working directory when none is given
const DEFAULT_PROFILE: &str = "yatra.json";

/// Load the given profile, else `./yatra.json`, else defaults.
/// Environment overrides apply in every case.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        tracing::info!("Loading profile {}", path.display());
        return Config::load(path).with_context(|| format!("Failed to load profile {}", path.display()));
    }

    let default_profile = PathBuf::from(DEFAULT_PROFILE);
    if default_profile.exists() {
        tracing::info!("Loading profile {}", DEFAULT_PROFILE);
        return Config::load(&default_profile)
            .with_context(|| format!("Failed to load profile {DEFAULT_PROFILE}"));
    }

    tracing::debug!("No profile found, using defaults");
    Ok(Config::new())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_explicit_profile_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(
            &path,
            r#"{ "source_language": "fr", "matching": { "single_phrase_threshold": 0.8 } }"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.source_language, "fr");
        assert_eq!(config.target_language, "es");
        assert_eq!(config.matching.single_phrase_threshold, 0.8);
        assert_eq!(config.matching.composite_threshold, 0.5);
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.json"))).is_err());
    }
}
