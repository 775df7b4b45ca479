use crate::config::Config;
use anyhow::Result;
use clap::Parser;
use gradient::Interpolation;
use std::path::PathBuf;

/// Render procedural gradient pride flags to PNG files.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// TOML config file; command line options override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the images are written to (created if missing)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Flag to render, repeatable; all flags when omitted
    #[arg(short, long = "flag", value_name = "NAME")]
    pub flags: Vec<String>,

    /// Also write every rendered flag stacked into one image
    #[arg(long)]
    pub combine: bool,

    /// Kernel of the lineless hue ramp (linear, clamped, cubic, cubic-bump, quartic-bump, sine-bump)
    #[arg(short, long, value_name = "NAME")]
    pub kernel: Option<Interpolation>,

    /// Lineless correction strength; larger is gentler
    #[arg(long)]
    pub limit: Option<f64>,

    /// Render on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Print the flag catalog and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        self.apply(&mut config);
        config.validate()?;

        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }

        if let Some(width) = self.width {
            config.width = width;
        }

        if let Some(height) = self.height {
            config.height = height;
        }

        if !self.flags.is_empty() {
            config.flags = self.flags.clone();
        }

        if let Some(kernel) = self.kernel {
            config.kernel = kernel;
        }

        if let Some(limit) = self.limit {
            config.limit = limit;
        }

        config.combine |= self.combine;

        if self.sequential {
            config.parallel = false;
        }
    }
}
