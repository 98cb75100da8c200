use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Run settings, read from an optional TOML file and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Worker threads, and so the number of chunks the input is split into
    #[validate(range(min = 1, max = 4096))]
    pub workers: usize,

    /// Fixed station hash seed; a random one is drawn when unset
    pub hash_seed: Option<u64>,

    pub show_progress: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            hash_seed: None,
            show_progress: false,
        }
    }
}

impl ProcessorConfig {
    /// Load settings from a configuration file (format chosen by extension)
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
