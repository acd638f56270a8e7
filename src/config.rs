use crate::error::{CineError, Result};
use crate::types::config::CineConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "cinescore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".cinescore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cinescore/config.toml";

pub const TMDB_KEY_ENV: &str = "CINESCORE_TMDB_API_KEY";
pub const OMDB_KEY_ENV: &str = "CINESCORE_OMDB_API_KEY";

/// Loads configuration from the global file, the working-directory file
/// and the local override, deep-merged in that order. Every layer is
/// optional; missing layers contribute nothing.
pub fn load_config(root: &Path) -> Result<CineConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let mut cfg = load_config_with_global(root, global.as_deref())?;
    apply_env_overrides(&mut cfg, |name| std::env::var(name).ok());
    cfg.validate()?;
    Ok(cfg)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<CineConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    merged
        .try_into()
        .map_err(|e: toml::de::Error| CineError::ConfigParse(e.to_string()))
}

/// Environment keys override file-provided ones.
pub(crate) fn apply_env_overrides(
    cfg: &mut CineConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(key) = lookup(TMDB_KEY_ENV) {
        cfg.tmdb.api_key = key;
    }
    if let Some(key) = lookup(OMDB_KEY_ENV) {
        cfg.omdb.api_key = key;
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CineError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.tmdb.api_key.is_empty());
        assert_eq!(cfg.http.timeout_secs, 30);
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[tmdb]
api_key = "global-tmdb-key"

[http]
timeout_secs = 10
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[tmdb]
api_key = "repo-tmdb-key"

[omdb]
api_key = "repo-omdb-key"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".cinescore"))
            .expect("local config dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[omdb]
api_key = "local-omdb-key"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.tmdb.api_key, "repo-tmdb-key");
        assert_eq!(cfg.omdb.api_key, "local-omdb-key");
        assert_eq!(cfg.http.timeout_secs, 10);
        assert_eq!(cfg.tmdb.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn load_config_reports_malformed_layer() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "tmdb = not toml")
            .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains("config parse error"));
    }

    #[test]
    fn env_overrides_replace_file_keys() {
        let mut cfg = CineConfig::default();
        cfg.tmdb.api_key = "file-tmdb-key".to_string();

        apply_env_overrides(&mut cfg, |name| match name {
            TMDB_KEY_ENV => Some("env-tmdb-key".to_string()),
            _ => None,
        });

        assert_eq!(cfg.tmdb.api_key, "env-tmdb-key");
        assert!(cfg.omdb.api_key.is_empty());
    }
}
