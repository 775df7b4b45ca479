//! Prism: batch renderer for procedural pride-flag gradients.
//!
//! Reads an optional TOML config, lets command line options override it and
//! writes one PNG per selected flag (plus an optional combined sheet) into the
//! output directory.

mod cli;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use flag_catalog::Flag;

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Defaults to `info` unless `RUST_LOG` says otherwise.
fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = cutil::time::local_now("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let cli = cli::Cli::parse();

    if cli.list {
        for flag in Flag::all() {
            println!("{:<16}{}", flag.id(), flag.name());
        }
        return Ok(());
    }

    let config = cli.resolve_config()?;
    log::info!(
        "rendering {} flag(s) at {}x{} into {}",
        config.selected_flags()?.len(),
        config.width,
        config.height,
        config.output_dir.display()
    );

    let summary = render::render_all(&config)?;
    if summary.failed.is_empty() {
        log::info!("done, {} file(s) written", summary.written.len());
    } else {
        log::warn!(
            "done, {} file(s) written, {} flag(s) failed",
            summary.written.len(),
            summary.failed.len()
        );
    }

    Ok(())
}
