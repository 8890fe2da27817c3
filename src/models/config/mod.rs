use std::path::Path;

mod error;
mod network_config;

pub use error::ConfigError;

/// Common interface for loading configuration files
///
/// Network descriptors are stored one per JSON file; the file stem encodes
/// the registry key (`<chain>_<kind>`, e.g. `bitcoin_testnet`).
pub trait ConfigLoader: Sized {
    fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
    where
        T: FromIterator<(String, Self)>;

    fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

    fn validate(&self) -> Result<(), String>;

    fn is_json_file(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase() == "json")
            .unwrap_or(false)
    }
}
