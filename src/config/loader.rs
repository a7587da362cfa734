//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! metadata and service catalogs from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog::InMemoryCatalog;
use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, ServiceCatalog};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and builds the material catalog the calculations run against.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── engine.yaml          # Engine metadata and bind address
/// └── catalogs/
///     └── paver_patio.yaml # One service catalog per file
/// ```
///
/// # Example
///
/// ```no_run
/// use materials_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded {} v{}", loader.engine().name, loader.engine().version);
///
/// let catalog = loader.catalog();
/// println!("{} services", catalog.service_count());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` or the `catalogs` directory is missing
    /// - The `catalogs` directory holds no YAML files
    /// - Any file contains invalid YAML
    /// - A material refers to a category its service does not declare
    /// - Two materials share an id
    ///
    /// # Example
    ///
    /// ```no_run
    /// use materials_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), materials_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let metadata = Self::load_yaml::<EngineMetadata>(&engine_path)?;

        let catalogs_dir = path.join("catalogs");
        let catalogs = Self::load_catalogs(&catalogs_dir)?;

        Ok(Self {
            config: EngineConfig::new(metadata, catalogs),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all catalog files from the catalogs directory.
    fn load_catalogs(catalogs_dir: &Path) -> EngineResult<Vec<ServiceCatalog>> {
        let catalogs_dir_str = catalogs_dir.display().to_string();

        if !catalogs_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: catalogs_dir_str,
            });
        }

        let entries = fs::read_dir(catalogs_dir).map_err(|_| EngineError::ConfigNotFound {
            path: catalogs_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: catalogs_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no catalog files found)", catalogs_dir_str),
            });
        }

        let mut catalogs = Vec::with_capacity(paths.len());
        let mut material_ids = HashSet::new();

        for path in paths {
            let catalog = Self::load_yaml::<ServiceCatalog>(&path)?;
            Self::validate_catalog(&path, &catalog, &mut material_ids)?;
            catalogs.push(catalog);
        }

        Ok(catalogs)
    }

    /// Checks material category references and material id uniqueness.
    fn validate_catalog(
        path: &Path,
        catalog: &ServiceCatalog,
        material_ids: &mut HashSet<String>,
    ) -> EngineResult<()> {
        let category_keys: HashSet<&str> =
            catalog.categories.iter().map(|c| c.key.as_str()).collect();

        for material in &catalog.materials {
            if !category_keys.contains(material.category_key.as_str()) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "material '{}' refers to undeclared category '{}'",
                        material.id, material.category_key
                    ),
                });
            }

            if !material_ids.insert(material.id.clone()) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate material id '{}'", material.id),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Builds an in-memory catalog from the loaded service catalogs.
    pub fn catalog(&self) -> InMemoryCatalog {
        InMemoryCatalog::new(self.config.catalogs().iter().cloned())
    }
}
