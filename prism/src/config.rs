use anyhow::{Context, Result, bail};
use derivative::Derivative;
use flag_catalog::Flag;
use gradient::{DEFAULT_LIMIT, Interpolation, LinelessConfig};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::{fs, path::Path, path::PathBuf};

pub const COMBINED_FILE_NAME: &str = "flags.png";

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[derivative(Default(value = "PathBuf::from(\"output\")"))]
    pub output_dir: PathBuf,

    #[derivative(Default(value = "1920"))]
    pub width: u32,

    #[derivative(Default(value = "120"))]
    pub height: u32,

    // empty selects the whole catalog
    pub flags: Vec<String>,

    // also write every flag stacked into one sheet
    pub combine: bool,

    #[derivative(Default(value = "true"))]
    pub parallel: bool,

    // kernel of the lineless hue ramp, by name, e.g. "sine-bump"
    #[serde_as(as = "DisplayFromStr")]
    #[derivative(Default(value = "Interpolation::Cubic"))]
    pub kernel: Interpolation,

    // lineless correction strength, larger is gentler
    #[derivative(Default(value = "DEFAULT_LIMIT"))]
    pub limit: f64,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {} failed", path.display()))?;

        let config = toml::from_str::<Config>(&text)
            .with_context(|| format!("parse config {} failed", path.display()))?;

        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "canvas size must be positive, got {}x{}",
                self.width,
                self.height
            );
        }

        if !self.limit.is_finite() || self.limit <= 0.0 {
            bail!("lineless limit must be a positive number, got {}", self.limit);
        }

        self.selected_flags()?;
        Ok(())
    }

    pub fn lineless(&self) -> LinelessConfig {
        LinelessConfig::new()
            .with_kernel(self.kernel)
            .with_limit(self.limit)
    }

    pub fn selected_flags(&self) -> Result<Vec<Flag>> {
        if self.flags.is_empty() {
            return Ok(Flag::all().to_vec());
        }

        let mut flags = vec![];
        for name in &self.flags {
            let flag = Flag::from_name(name)?;
            if !flags.contains(&flag) {
                flags.push(flag);
            }
        }

        Ok(flags)
    }

    pub fn flag_path(&self, flag: Flag) -> PathBuf {
        self.output_dir.join(format!("{}.png", flag.id()))
    }

    pub fn combined_path(&self) -> PathBuf {
        self.output_dir.join(COMBINED_FILE_NAME)
    }
}
