use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

use dnsimple_provider::{CredentialSource, ProviderError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overrides the config directory when set.
pub const CONFIG_DIR_ENV: &str = "DNSIMPLE_CONFIG_DIR";

const TOKEN_FILE: &str = "token";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config directory cannot be empty")]
    EmptyDir,

    #[error("cannot determine the home directory")]
    NoHome,

    #[error("not authenticated; run `simple` and complete the setup first")]
    NotAuthenticated,

    #[error("token file is empty")]
    EmptyToken,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sandbox: bool,
}

/// Resolved file locations, shown on the help tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub config_dir: PathBuf,
    pub token_file: PathBuf,
    pub config_file: PathBuf,
}

/// Token and config files under one directory.
///
/// The directory can be changed at runtime by the setup wizard; every path
/// is derived from the current value on each call.
#[derive(Debug)]
pub struct ConfigStore {
    dir: RwLock<PathBuf>,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Expand `~` and `~/...`, then normalise separators and `.` segments.
pub fn expand_path(raw: &str) -> Result<PathBuf, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::EmptyDir);
    }
    let path = if raw == "~" {
        dirs::home_dir().ok_or(ConfigError::NoHome)?
    } else if let Some(rest) = raw.strip_prefix("~/") {
        dirs::home_dir().ok_or(ConfigError::NoHome)?.join(rest)
    } else {
        PathBuf::from(raw)
    };
    Ok(path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

/// Directory to use: explicit override, then the environment, then
/// `~/.config/dnsimplectl`.
pub fn resolve_dir(override_dir: Option<&str>, env_dir: Option<&str>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return expand_path(dir);
    }
    if let Some(dir) = env_dir.filter(|d| !d.trim().is_empty()) {
        return expand_path(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".config").join("dnsimplectl"))
        .ok_or(ConfigError::NoHome)
}

impl ConfigStore {
    /// Store rooted at an already resolved directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: RwLock::new(dir.into()),
        }
    }

    /// Store rooted per [`resolve_dir`], reading [`CONFIG_DIR_ENV`].
    pub fn resolve(override_dir: Option<&str>) -> Result<Self, ConfigError> {
        let env_dir = std::env::var(CONFIG_DIR_ENV).ok();
        resolve_dir(override_dir, env_dir.as_deref()).map(Self::at)
    }

    pub fn dir(&self) -> PathBuf {
        match self.dir.read() {
            Ok(dir) => dir.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Point the store at another directory. Nothing is created until the
    /// next write.
    pub fn set_dir(&self, raw: &str) -> Result<PathBuf, ConfigError> {
        let dir = expand_path(raw)?;
        match self.dir.write() {
            Ok(mut guard) => *guard = dir.clone(),
            Err(poisoned) => *poisoned.into_inner() = dir.clone(),
        }
        log::info!("Config directory set to {}", dir.display());
        Ok(dir)
    }

    pub fn token_path(&self) -> PathBuf {
        self.dir().join(TOKEN_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir().join(CONFIG_FILE)
    }

    pub fn paths(&self) -> StoragePaths {
        StoragePaths {
            config_dir: self.dir(),
            token_file: self.token_path(),
            config_file: self.config_path(),
        }
    }

    pub fn has_token(&self) -> bool {
        self.load_token().is_ok()
    }

    pub fn load_token(&self) -> Result<String, ConfigError> {
        let path = self.token_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotAuthenticated)
            }
            Err(e) => return Err(io_error(&path)(e)),
        };
        let token = raw.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(token.to_string())
    }

    pub fn save_token(&self, token: &str) -> Result<(), ConfigError> {
        self.ensure_dir()?;
        write_private(&self.token_path(), token.trim().as_bytes())
    }

    /// Delete the token file. Returns `false` when there was none.
    pub fn remove_token(&self) -> Result<bool, ConfigError> {
        let path = self.token_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    /// Missing file reads as the default config.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(io_error(&path)(e)),
        };
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json { path, source })
    }

    pub fn save_config(&self, config: &Config) -> Result<(), ConfigError> {
        self.ensure_dir()?;
        let path = self.config_path();
        let mut body = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Json {
            path: path.clone(),
            source,
        })?;
        body.push('\n');
        write_private(&path, body.as_bytes())
    }

    fn ensure_dir(&self) -> Result<(), ConfigError> {
        let dir = self.dir();
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder.create(&dir).map_err(io_error(&dir))
    }
}

/// Write a file readable by the owner only.
fn write_private(path: &Path, contents: &[u8]) -> Result<(), ConfigError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path).map_err(io_error(path))?;
    file.write_all(contents).map_err(io_error(path))?;

    // mode() only applies to newly created files
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(io_error(path))?;
    }
    Ok(())
}

impl CredentialSource for ConfigStore {
    fn token(&self) -> Result<String, ProviderError> {
        self.load_token()
            .map_err(|e| ProviderError::NotAuthenticated {
                detail: e.to_string(),
            })
    }

    fn account_id(&self) -> Option<String> {
        self.load_config()
            .ok()
            .and_then(|c| c.account_id)
            .filter(|id| !id.trim().is_empty())
    }

    fn remember_account_id(&self, account_id: &str) {
        let mut config = self.load_config().unwrap_or_default();
        config.account_id = Some(account_id.to_string());
        if let Err(e) = self.save_config(&config) {
            log::warn!("Could not cache account id: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("nested"));

        assert!(!store.has_token());
        assert!(matches!(store.load_token(), Err(ConfigError::NotAuthenticated)));

        store.save_token("  abc123\n").unwrap();
        assert_eq!(store.load_token().unwrap(), "abc123");
        assert!(store.remove_token().unwrap());
        assert!(!store.remove_token().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn files_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("cfg"));
        store.save_token("abc").unwrap();
        store.save_config(&Config::default()).unwrap();

        let mode = |p: PathBuf| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(store.token_path()), 0o600);
        assert_eq!(mode(store.config_path()), 0o600);
        assert_eq!(mode(store.dir()), 0o700);
    }

    #[test]
    fn empty_token_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path());
        fs::write(store.token_path(), "\n").unwrap();
        assert!(matches!(store.load_token(), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn config_defaults_and_omits_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path());
        assert_eq!(store.load_config().unwrap(), Config::default());

        store.save_config(&Config::default()).unwrap();
        assert_eq!(fs::read_to_string(store.config_path()).unwrap().trim(), "{}");

        let config = Config {
            account_id: Some("1234".into()),
            sandbox: true,
        };
        store.save_config(&config).unwrap();
        assert_eq!(store.load_config().unwrap(), config);
    }

    #[test]
    fn remembered_account_id_is_served() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path());
        assert_eq!(store.account_id(), None);
        store.remember_account_id("5678");
        assert_eq!(store.account_id().as_deref(), Some("5678"));
    }

    #[test]
    fn missing_token_maps_to_not_authenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::at(dir.path());
        assert!(matches!(
            CredentialSource::token(&store),
            Err(ProviderError::NotAuthenticated { .. })
        ));
    }

    #[test]
    fn resolve_prefers_override_then_env() {
        assert_eq!(
            resolve_dir(Some("/tmp/a"), Some("/tmp/b")).unwrap(),
            PathBuf::from("/tmp/a")
        );
        assert_eq!(
            resolve_dir(None, Some("/tmp/b/./c")).unwrap(),
            PathBuf::from("/tmp/b/c")
        );
        assert_eq!(
            resolve_dir(Some("  "), Some("/tmp/b")).unwrap(),
            PathBuf::from("/tmp/b")
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~").unwrap(), home);
            assert_eq!(expand_path("~/x").unwrap(), home.join("x"));
        }
        assert!(matches!(expand_path("   "), Err(ConfigError::EmptyDir)));
    }

    #[test]
    fn set_dir_moves_paths() {
        let store = ConfigStore::at("/tmp/one");
        store.set_dir("/tmp/two").unwrap();
        assert_eq!(store.token_path(), PathBuf::from("/tmp/two/token"));
        assert!(store.set_dir("").is_err());
        assert_eq!(store.dir(), PathBuf::from("/tmp/two"));
    }
}
