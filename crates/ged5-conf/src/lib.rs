use std::path::Path;

use config::Config;
use config::ConfigError as ExternalConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use directories::ProjectDirs;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

const ENV_PREFIX: &str = "GED5";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration build/deserialize error")]
    Config(#[from] ExternalConfigError),
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Treat unknown tags, illegal nesting and dangling pointers as errors.
    pub strict: bool,
    pub privacy: PrivacySettings,
}

/// Year windows used when deciding whether an individual is private.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PrivacySettings {
    /// Evaluate as of this year instead of the current one.
    pub current_year: Option<i32>,
    pub birth_window: u32,
    pub death_window: u32,
    pub ancestor_birth_window: u32,
    pub ancestor_death_window: u32,
    /// How many generations of ancestors to inspect.
    pub max_depth: u32,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            current_year: None,
            birth_window: 100,
            death_window: 40,
            ancestor_birth_window: 140,
            ancestor_death_window: 100,
            max_depth: 16,
        }
    }
}

impl Settings {
    /// Loads settings for a project, lowest priority first: the user config
    /// file, `.ged5.toml`, `ged5.toml`, then `GED5_*` environment variables.
    pub fn new(project_root: &Path) -> Result<Self, ConfigError> {
        let user_config_file = ProjectDirs::from("org", "ged5", "ged5")
            .map(|proj_dirs| proj_dirs.config_dir().join("ged5.toml"));

        Self::load_from_paths(project_root, user_config_file.as_deref(), environment())
    }

    fn load_from_paths(
        project_root: &Path,
        user_config_path: Option<&Path>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = user_config_path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            File::from(project_root.join(".ged5.toml"))
                .format(FileFormat::Toml)
                .required(false),
        );

        builder = builder.add_source(
            File::from(project_root.join("ged5.toml"))
                .format(FileFormat::Toml)
                .required(false),
        );

        builder = builder.add_source(environment);

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
