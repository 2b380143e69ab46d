//! Config loading facade: assembles sources in precedence order and
//! deserializes the result.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::BrandkitConfig;
use config::ConfigError;
use std::path::Path;
use tracing::debug;

/// Loads `BrandkitConfig` from layered sources.
///
/// Precedence (lowest to highest): defaults, global file, workspace
/// `brandkit.toml`, explicit file, `BRANDKIT__*` environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load with the user's global config file.
    pub fn load(
        workspace_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<BrandkitConfig, ConfigError> {
        let global = global_file::global_config_path();
        Self::load_layers(global.as_deref(), workspace_root, explicit)
    }

    /// Load from explicit layer locations.
    pub fn load_layers(
        global: Option<&Path>,
        workspace_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<BrandkitConfig, ConfigError> {
        let mut builder = builder_with_defaults()?;
        builder = global_file::add_to_builder(builder, global)?;
        builder = workspace_file::add_to_builder(builder, workspace_root)?;

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            debug!(config_path = %path.display(), "Using explicit configuration file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load a single file over the defaults, ignoring other sources.
    pub fn load_from_file(path: &Path) -> Result<BrandkitConfig, ConfigError> {
        builder_with_defaults()?
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Path of the per-user config file, if a home directory is known.
    pub fn global_config_path() -> Option<std::path::PathBuf> {
        global_file::global_config_path()
    }
}
