use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
/// A drifting violet particle background for the terminal
pub struct Args {
    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Animation refresh rate, overriding the config file
    #[arg(long)]
    pub fps: Option<u32>,
    /// Seed for particle placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Fixed particle count for every viewport width
    #[arg(long)]
    pub count: Option<usize>,
}

impl Args {
    /// Apply command line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut drift_config::Config) {
        if let Some(fps) = self.fps {
            config.display.fps = fps.max(1);
        }
        if let Some(count) = self.count {
            config.field.mobile_count = count;
            config.field.desktop_count = count;
        }
    }
}
