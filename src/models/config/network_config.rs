use std::path::Path;

use url::Url;

use crate::models::{ConfigLoader, NetworkDescriptor};

use super::error::ConfigError;

impl ConfigLoader for NetworkDescriptor {
    fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
    where
        T: FromIterator<(String, Self)>,
    {
        let network_dir = path.unwrap_or(Path::new("config/networks"));
        let mut pairs = Vec::new();

        if !network_dir.exists() {
            return Err(ConfigError::file_error("networks directory not found"));
        }

        for entry in std::fs::read_dir(network_dir)? {
            let entry = entry?;
            let path = entry.path();

            if !Self::is_json_file(&path) {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            // A broken descriptor file is a hard error, not a skip: a client
            // built from a silently dropped override would target the wrong
            // endpoints.
            let descriptor = Self::load_from_path(&path)?;
            pairs.push((stem, descriptor));
        }

        Ok(T::from_iter(pairs))
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let descriptor: NetworkDescriptor = serde_json::from_reader(file)?;

        if let Err(validation_error) = descriptor.validate() {
            return Err(ConfigError::validation_error(validation_error));
        }

        Ok(descriptor)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Descriptor name must not be empty".to_string());
        }

        if self.network_id.is_empty() {
            return Err("network_id must not be empty".to_string());
        }

        if !self.coin_type.chars().all(|c| c.is_ascii_digit()) {
            return Err("coin_type must be a numeric SLIP-44 string".to_string());
        }

        if self.rpc_urls.is_empty() {
            return Err("rpc_urls must not be empty".to_string());
        }

        for url in self.rpc_urls.iter().chain(self.scraper_urls.iter()) {
            let parsed = Url::parse(url).map_err(|e| format!("Invalid URL {}: {}", url, e))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(format!("URL {} must use http or https", url));
            }
        }

        for view in &self.explorer_views {
            if !view.tx.contains("{hash}") {
                return Err(format!(
                    "Explorer tx template {} is missing the {{hash}} placeholder",
                    view.tx
                ));
            }
            if !view.address.contains("{address}") {
                return Err(format!(
                    "Explorer address template {} is missing the {{address}} placeholder",
                    view.address
                ));
            }
        }

        Ok(())
    }
}
