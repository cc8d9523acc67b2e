//! SampleDemo Subcommands

mod start;

use self::start::StartCmd;
use crate::config::SampleDemoConfig;
use abscissa_core::{config::Override, Command, Configurable, FrameworkError, Runnable};
use std::path::PathBuf;

/// SampleDemo Configuration Filename
pub const CONFIG_FILE: &str = "sample_demo.toml";

/// SampleDemo Subcommands
#[derive(clap::Parser, Command, Debug, Runnable)]
pub enum SampleDemoCmd {
    /// Run the application
    Start(StartCmd),
}

/// Entry point for the application. It needs to be a struct to allow using subcommands!
#[derive(clap::Parser, Command, Debug)]
#[command(author, about, version)]
pub struct EntryPoint {
    /// Subcommand to execute
    #[command(subcommand)]
    cmd: SampleDemoCmd,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Use the specified config file
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        self.cmd.run()
    }
}

impl Configurable<SampleDemoConfig> for EntryPoint {
    /// Location of the configuration file. A missing file is not an error;
    /// the defaults apply instead.
    fn config_path(&self) -> Option<PathBuf> {
        let filename = self
            .config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        if filename.exists() {
            Some(filename)
        } else {
            None
        }
    }

    /// Apply changes to the config after it's been loaded, e.g. overriding
    /// values in a config file using command-line options.
    fn process_config(&self, config: SampleDemoConfig) -> Result<SampleDemoConfig, FrameworkError> {
        match &self.cmd {
            SampleDemoCmd::Start(cmd) => cmd.override_config(config),
        }
    }
}
