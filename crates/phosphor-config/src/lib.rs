//! phosphor configuration system.
//!
//! JSON-based configuration with deep-merge import, atomic export and
//! range clamping. All config sections use defaults so partial documents
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use phosphor_config::{load_startup, ConfigStore};
//!
//! let mut store = ConfigStore::new(load_startup(Path::new("config.json")));
//! store.apply_json(r#"{"crt": {"curvature": 0.4}}"#).expect("valid document");
//! println!("{}", store.export_json().expect("serializable"));
//! ```

pub mod colors;
pub mod json_writer;
pub mod loader;
pub mod merge;
pub mod schema;
pub mod store;
pub mod validation;

pub use json_writer::{config_to_json, save_config_to_path, EXPORT_FILE_NAME};
pub use loader::{load_from_path, load_startup};
pub use schema::PhosphorConfig;
pub use store::ConfigStore;
pub use validation::ClampedField;
