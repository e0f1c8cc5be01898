//! Log file setup.
//!
//! The terminal is taken over by the animation, so logs go to
//! `drift.log` in the platform data directory. `DRIFT_LOG` takes an
//! `EnvFilter` directive and defaults to `info`.

use std::fs::{self, File};
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DRIFT_LOG";
const LOG_FILE: &str = "drift.log";

pub fn init() -> Result<()> {
    let Some(dirs) = ProjectDirs::from("", "", "drift") else {
        return Ok(());
    };
    let dir = dirs.data_dir();
    fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    let file = File::create(dir.join(LOG_FILE)).wrap_err("failed to create log file")?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
