use crate::config::Config;
use anyhow::{Context, Result};
use cutil::{
    fs::{ensure_dir, file_size, pretty_bytes_size},
    time::pretty_duration,
};
use flag_catalog::Flag;
use image::RgbImage;
use std::{path::PathBuf, time::Instant};

#[derive(Debug, Default)]
pub struct Summary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<Flag>,
}

/// Renders every selected flag into the output directory.
///
/// A flag that fails to render or save is logged and skipped. Only a broken
/// setup (output directory, combined sheet) fails the whole run.
pub fn render_all(config: &Config) -> Result<Summary> {
    ensure_dir(&config.output_dir).with_context(|| {
        format!(
            "create output directory {} failed",
            config.output_dir.display()
        )
    })?;

    let mut summary = Summary::default();
    let mut sheets = vec![];

    for flag in config.selected_flags()? {
        match render_one(config, flag) {
            Ok((path, canvas)) => {
                summary.written.push(path);
                if config.combine {
                    sheets.push(canvas);
                }
            }
            Err(e) => {
                log::warn!("{} flag skipped: {e:?}", flag.name());
                summary.failed.push(flag);
            }
        }
    }

    if config.combine && !sheets.is_empty() {
        let path = config.combined_path();
        let sheet = gradient::stack(&sheets)?;
        sheet
            .save(&path)
            .with_context(|| format!("save {} failed", path.display()))?;

        log::info!(
            "combined {} flags into {} ({})",
            sheets.len(),
            path.display(),
            pretty_bytes_size(file_size(&path))
        );
        summary.written.push(path);
    }

    Ok(summary)
}

fn render_one(config: &Config, flag: Flag) -> Result<(PathBuf, RgbImage)> {
    let start = Instant::now();
    let canvas = flag.render_with(
        config.width,
        config.height,
        config.parallel,
        config.lineless(),
    )?;
    let elapsed = start.elapsed();

    let path = config.flag_path(flag);
    canvas
        .save(&path)
        .with_context(|| format!("save {} failed", path.display()))?;

    log::info!(
        "{} flag generated in {} -> {} ({})",
        flag.name(),
        pretty_duration(elapsed),
        path.display(),
        pretty_bytes_size(file_size(&path))
    );

    Ok((path, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageReader;
    use std::fs;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            output_dir: dir.join("out"),
            width: 48,
            height: 6,
            ..Config::default()
        }
    }

    #[test]
    fn test_render_all_writes_every_flag() -> Result<()> {
        let dir = tempdir()?;
        let config = config_in(dir.path());

        let summary = render_all(&config)?;
        assert_eq!(summary.written.len(), Flag::all().len());
        assert!(summary.failed.is_empty());

        for flag in Flag::all() {
            let img = ImageReader::open(config.flag_path(*flag))?.decode()?;
            assert_eq!((img.width(), img.height()), (48, 6));
        }

        assert!(!config.combined_path().exists());
        Ok(())
    }

    #[test]
    fn test_render_all_combined_sheet() -> Result<()> {
        let dir = tempdir()?;
        let config = Config {
            flags: vec!["trans".into(), "bi".into(), "pan".into()],
            combine: true,
            parallel: false,
            ..config_in(dir.path())
        };

        let summary = render_all(&config)?;
        assert_eq!(summary.written.len(), 4);

        let sheet = ImageReader::open(config.combined_path())?
            .decode()?
            .to_rgb8();
        assert_eq!(sheet.dimensions(), (48, 18));

        let trans = Flag::Trans.render(48, 6)?;
        assert_eq!(sheet.get_pixel(10, 2), trans.get_pixel(10, 2));

        Ok(())
    }

    #[test]
    fn test_configured_kernel_shapes_the_rainbow() -> Result<()> {
        let dir = tempdir()?;
        let cubic = Config {
            flags: vec!["gay".into()],
            output_dir: dir.path().join("cubic"),
            ..config_in(dir.path())
        };
        let linear = Config {
            output_dir: dir.path().join("linear"),
            kernel: gradient::Interpolation::Linear,
            ..cubic.clone()
        };

        render_all(&cubic)?;
        render_all(&linear)?;

        let a = ImageReader::open(cubic.flag_path(Flag::Gay))?.decode()?.to_rgb8();
        let b = ImageReader::open(linear.flag_path(Flag::Gay))?.decode()?.to_rgb8();
        assert_ne!(a.as_raw(), b.as_raw());

        Ok(())
    }

    #[test]
    fn test_existing_output_directory_is_fine() -> Result<()> {
        let dir = tempdir()?;
        let config = Config {
            flags: vec!["ace".into()],
            ..config_in(dir.path())
        };

        fs::create_dir_all(&config.output_dir)?;
        render_all(&config)?;
        render_all(&config)?;

        assert!(config.flag_path(Flag::Ace).is_file());
        Ok(())
    }

    #[test]
    fn test_output_directory_blocked_by_file() -> Result<()> {
        let dir = tempdir()?;
        let config = config_in(dir.path());
        fs::write(&config.output_dir, "in the way")?;

        assert!(render_all(&config).is_err());
        Ok(())
    }
}
