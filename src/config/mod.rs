//! Configuration loading and management for the Materials Engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files, including engine metadata and the service catalogs of
//! material categories and materials.
//!
//! # Example
//!
//! ```no_run
//! use materials_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded engine: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, ServiceCatalog};
