use crate::config::ProcessorConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;
use validator::Validate;

#[derive(Parser, Debug)]
#[command(name = "brc-processor")]
#[command(about = "Per-station min/mean/max temperatures from a `<station>;<temperature>` file")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Measurements file, one `<station>;<temperature>` record per line")]
    pub file: Option<PathBuf>,

    #[arg(short, long, help = "Worker threads [default: number of CPUs]")]
    pub workers: Option<usize>,

    #[arg(long, help = "Fixed station hash seed for reproducible runs")]
    pub seed: Option<u64>,

    #[arg(short, long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Show a progress spinner on stderr")]
    pub progress: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the configuration file, then command-line flags
    pub fn resolve_config(&self) -> Result<ProcessorConfig> {
        let mut config = match &self.config {
            Some(path) => ProcessorConfig::from_file(path)?,
            None => ProcessorConfig::default(),
        };

        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(seed) = self.seed {
            config.hash_seed = Some(seed);
        }
        if self.progress {
            config.show_progress = true;
        }

        config.validate()?;
        Ok(config)
    }
}
