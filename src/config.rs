//! Layered configuration resolution.
//!
//! Configuration is folded from a fixed-priority stack of sources, lowest
//! to highest: built-in defaults, the global file in the user config
//! directory, the local file in the working directory, and an optional
//! custom path taken from `GFL_CONFIG_FILE`. A source only wins for the
//! fields it explicitly sets; each resolved field remembers which source
//! supplied it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GflError;

/// File name used for both the global (user config dir) and local (cwd) layer
pub const CONFIG_FILE_NAME: &str = ".gfl.config.yml";

/// Environment variable holding an optional custom config path
pub const CONFIG_FILE_ENV: &str = "GFL_CONFIG_FILE";

/// Provenance label for values no source overrode
pub const DEFAULT_SOURCE: &str = "default";

/// Fully-merged configuration values.
///
/// Every field always has a value; if no source sets one, the built-in
/// default stands.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub debug: bool,
    pub dev_base_branch: String,
    pub production_branch: String,
    pub nickname: String,
    pub feature_prefix: String,
    pub fix_prefix: String,
    pub hotfix_prefix: String,
    pub branch_case_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            dev_base_branch: "dev".to_string(),
            production_branch: "main".to_string(),
            nickname: String::new(),
            feature_prefix: "feature".to_string(),
            fix_prefix: "fix".to_string(),
            hotfix_prefix: "hotfix".to_string(),
            branch_case_format: "original".to_string(),
        }
    }
}

/// Raw fields as parsed from a single source file.
///
/// `None` means the file did not mention the field at all; `Some` means it
/// was explicitly set, even to an empty string or `false`. The distinction
/// is what makes layering correct: an explicit `nickname: ""` in a later
/// source overrides an earlier non-empty nickname, while omitting the key
/// does not.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConfig {
    pub debug: Option<bool>,
    pub dev_base_branch: Option<String>,
    pub production_branch: Option<String>,
    pub nickname: Option<String>,
    pub feature_prefix: Option<String>,
    pub fix_prefix: Option<String>,
    pub hotfix_prefix: Option<String>,
    pub branch_case_format: Option<String>,
}

impl RawConfig {
    /// True when no field is explicitly set
    pub fn is_empty(&self) -> bool {
        self.debug.is_none()
            && self.dev_base_branch.is_none()
            && self.production_branch.is_none()
            && self.nickname.is_none()
            && self.feature_prefix.is_none()
            && self.fix_prefix.is_none()
            && self.hotfix_prefix.is_none()
            && self.branch_case_format.is_none()
    }
}

/// One named origin of configuration values
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub name: String,
    pub path: PathBuf,
    pub exists: bool,
    pub fields: RawConfig,
    /// Set when the file exists but could not be parsed. The source then
    /// contributes no fields, but stays distinguishable from an absent one.
    pub parse_error: Option<String>,
}

impl ConfigSource {
    /// Load a source from disk.
    ///
    /// A missing file is a normal state (`exists=false`, nothing set), not
    /// an error. A present-but-malformed file yields `exists=true`, an
    /// empty field set and a recorded parse error for diagnostics.
    pub fn load(name: &str, path: &Path) -> Self {
        if !path.exists() {
            return ConfigSource {
                name: name.to_string(),
                path: path.to_path_buf(),
                exists: false,
                fields: RawConfig::default(),
                parse_error: None,
            };
        }

        let (fields, parse_error) = match fs::read_to_string(path) {
            Ok(raw) => match serde_yaml::from_str::<RawConfig>(&raw) {
                Ok(fields) => (fields, None),
                Err(e) => (RawConfig::default(), Some(e.to_string())),
            },
            // File exists but is unreadable; treated like a malformed one
            Err(e) => (RawConfig::default(), Some(e.to_string())),
        };

        ConfigSource {
            name: name.to_string(),
            path: path.to_path_buf(),
            exists: true,
            fields,
            parse_error,
        }
    }

    /// Reify a recorded parse failure into the error taxonomy, for logging
    pub fn as_error(&self) -> Option<GflError> {
        self.parse_error
            .as_ref()
            .map(|msg| GflError::config_parse(&self.path, msg.clone()))
    }
}

/// Which source supplied each resolved field
#[derive(Debug, Clone, PartialEq)]
pub struct Provenance {
    pub debug: String,
    pub dev_base_branch: String,
    pub production_branch: String,
    pub nickname: String,
    pub feature_prefix: String,
    pub fix_prefix: String,
    pub hotfix_prefix: String,
    pub branch_case_format: String,
}

impl Default for Provenance {
    fn default() -> Self {
        let default = DEFAULT_SOURCE.to_string();
        Provenance {
            debug: default.clone(),
            dev_base_branch: default.clone(),
            production_branch: default.clone(),
            nickname: default.clone(),
            feature_prefix: default.clone(),
            fix_prefix: default.clone(),
            hotfix_prefix: default.clone(),
            branch_case_format: default,
        }
    }
}

/// Final merged configuration plus per-field provenance.
///
/// Constructed fresh on every invocation that needs configuration and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    pub config: Config,
    pub provenance: Provenance,
}

impl ResolvedConfig {
    /// Overlay one source: copy every field it explicitly sets and record
    /// the source as that field's new provenance. Fields the source does
    /// not mention are left untouched.
    pub fn merge(&mut self, source: &ConfigSource) {
        if let Some(debug) = source.fields.debug {
            self.config.debug = debug;
            self.provenance.debug = source.name.clone();
        }
        if let Some(branch) = &source.fields.dev_base_branch {
            self.config.dev_base_branch = branch.clone();
            self.provenance.dev_base_branch = source.name.clone();
        }
        if let Some(branch) = &source.fields.production_branch {
            self.config.production_branch = branch.clone();
            self.provenance.production_branch = source.name.clone();
        }
        if let Some(nickname) = &source.fields.nickname {
            self.config.nickname = nickname.clone();
            self.provenance.nickname = source.name.clone();
        }
        if let Some(prefix) = &source.fields.feature_prefix {
            self.config.feature_prefix = prefix.clone();
            self.provenance.feature_prefix = source.name.clone();
        }
        if let Some(prefix) = &source.fields.fix_prefix {
            self.config.fix_prefix = prefix.clone();
            self.provenance.fix_prefix = source.name.clone();
        }
        if let Some(prefix) = &source.fields.hotfix_prefix {
            self.config.hotfix_prefix = prefix.clone();
            self.provenance.hotfix_prefix = source.name.clone();
        }
        if let Some(format) = &source.fields.branch_case_format {
            self.config.branch_case_format = format.clone();
            self.provenance.branch_case_format = source.name.clone();
        }
    }
}

/// Resolution result: the merged config and the ordered sources consulted
#[derive(Debug, Clone)]
pub struct ConfigReport {
    pub resolved: ResolvedConfig,
    pub sources: Vec<ConfigSource>,
}

/// Resolves configuration from the fixed-priority source stack
#[derive(Debug, Clone)]
pub struct Resolver {
    global_path: PathBuf,
    local_path: PathBuf,
    custom_path: Option<PathBuf>,
}

impl Resolver {
    /// Build a resolver over explicit paths (tests use this directly)
    pub fn new(global_path: PathBuf, local_path: PathBuf, custom_path: Option<PathBuf>) -> Self {
        Resolver {
            global_path,
            local_path,
            custom_path,
        }
    }

    /// Build the standard resolver: global file in the user config
    /// directory, local file in the working directory, custom path from
    /// `GFL_CONFIG_FILE` if set and non-empty.
    pub fn from_environment() -> Self {
        let global_path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME);
        let local_path = PathBuf::from(CONFIG_FILE_NAME);
        let custom_path = env::var(CONFIG_FILE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Resolver::new(global_path, local_path, custom_path)
    }

    /// Fold the source stack into a resolved configuration.
    ///
    /// Sources are loaded and merged in priority order: defaults, global,
    /// local, custom. A custom path equal to the global or local path is
    /// skipped so the same file is never merged twice. A malformed source
    /// contributes nothing but resolution continues; the breakage stays
    /// visible on the returned source list.
    pub fn resolve(&self) -> ConfigReport {
        let mut sources = vec![
            ConfigSource::load("global", &self.global_path),
            ConfigSource::load("local", &self.local_path),
        ];

        if let Some(custom) = &self.custom_path {
            if custom != &self.global_path && custom != &self.local_path {
                sources.push(ConfigSource::load("custom", custom));
            }
        }

        let mut resolved = ResolvedConfig::default();
        for source in &sources {
            resolved.merge(source);
        }

        ConfigReport { resolved, sources }
    }
}

/// Load the merged configuration from the standard source stack.
///
/// Convenience for callers that need values only, not provenance.
pub fn load_config() -> Config {
    Resolver::from_environment().resolve().resolved.config
}
