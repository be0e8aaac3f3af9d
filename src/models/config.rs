use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::dosage::is_schedule;
use crate::core::matcher::DEFAULT_THRESHOLD;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matcher: Matcher,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Matcher {
    /// Highest dissimilarity (0 = exact) still accepted as a match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Defaults {
    /// Schedule assumed for unmatched lines without one.
    #[serde(default = "default_dosage")]
    pub dosage: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Logging {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_dosage() -> String {
    "1-0-1".to_string()
}
fn default_filter() -> String {
    "warn".to_string()
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dosage: default_dosage(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // Files created before this version may carry wider permissions
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `section.field` assignment from the command line.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "matcher.threshold" => {
                let t: f64 = value.parse()?;
                if !(0.0..=1.0).contains(&t) {
                    anyhow::bail!("matcher.threshold must be between 0 and 1");
                }
                self.matcher.threshold = t;
            }
            "defaults.dosage" => {
                if !is_schedule(value) {
                    anyhow::bail!("defaults.dosage must look like 1-0-1");
                }
                self.defaults.dosage = value.to_string();
            }
            "catalog.path" => {
                self.catalog.path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "logging.filter" => self.logging.filter = value.to_string(),
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("RXCHECK_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rxcheck")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
