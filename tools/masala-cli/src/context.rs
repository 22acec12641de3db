//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use masala_cache::FileStorage;
use masala_commerce::cart::CartStore;
use masala_commerce::notify::Notifications;

use crate::config::{MasalaConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: MasalaConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            (MasalaConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some(path) => (MasalaConfig::load(&path)?, Some(path)),
                None => (MasalaConfig::default(), None),
            }
        };
        config.validate()?;

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory holding stored carts.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(&self.cwd, &self.config.storage.dir)
    }

    /// Open the configured cart.
    pub fn open_cart(&self) -> CartStore<FileStorage> {
        let dir = self.storage_dir();
        tracing::debug!(dir = %dir.display(), key = %self.config.storage.key, "opening cart");
        CartStore::load(
            FileStorage::new(dir),
            self.config.storage.key.clone(),
            self.config.currency(),
        )
    }

    /// Notification queue with the configured banner duration.
    pub fn notifications(&self) -> Notifications {
        let duration = i64::try_from(self.config.notifications.duration_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX);
        Notifications::new(duration)
    }
}

/// Find the nearest config file from `start` upwards.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("site").join("order");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("masala.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.path().join("masala.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("site");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("masala.toml"), "").unwrap();
        std::fs::write(nested.join("masala.json"), "{}").unwrap();

        assert_eq!(find_config(&nested), Some(nested.join("masala.json")));
    }

    #[test]
    fn test_resolve() {
        let cwd = Path::new("/srv/site");
        assert_eq!(resolve(cwd, Path::new(".masala")), cwd.join(".masala"));
        assert_eq!(resolve(cwd, Path::new("/var/carts")), PathBuf::from("/var/carts"));
    }

    #[test]
    fn test_unvalidated_duration_does_not_panic() {
        let mut config = MasalaConfig::default();
        config.notifications.duration_secs = u64::MAX;
        let ctx = Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("/srv/site"),
        };

        let mut queue = ctx.notifications();
        let now = chrono::Utc::now();
        queue.cart_empty(now);
        assert_eq!(queue.active(now).len(), 1);
    }
}
