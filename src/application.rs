//! SampleDemo Abscissa Application
//!
//! The composition root: everything the framework wires up is constructed
//! and registered here statically, with no runtime scanning.

use crate::{commands::EntryPoint, config::SampleDemoConfig};
use abscissa_core::{
    application::{self, AppCell},
    config::{self, CfgCell},
    trace, Application, FrameworkError, FrameworkErrorKind, StandardPaths,
};

/// Application state
pub static APP: AppCell<SampleDemoApp> = AppCell::new();

/// SampleDemo Application
#[derive(Debug)]
pub struct SampleDemoApp {
    /// Application configuration.
    config: CfgCell<SampleDemoConfig>,

    /// Application state.
    state: application::State<Self>,
}

/// Initialize a new application instance.
///
/// By default no configuration is loaded, and the framework state is
/// initialized to a default, empty state (no components, threads, etc).
impl Default for SampleDemoApp {
    fn default() -> Self {
        Self {
            config: CfgCell::default(),
            state: application::State::default(),
        }
    }
}

impl Application for SampleDemoApp {
    /// Entrypoint command for this application.
    type Cmd = EntryPoint;

    /// Application configuration.
    type Cfg = SampleDemoConfig;

    /// Paths to resources within the application.
    type Paths = StandardPaths;

    /// Accessor for application configuration.
    fn config(&self) -> config::Reader<SampleDemoConfig> {
        self.config.read()
    }

    /// Borrow the application state immutably.
    fn state(&self) -> &application::State<Self> {
        &self.state
    }

    /// Register all components used by this application.
    fn register_components(&mut self, command: &Self::Cmd) -> Result<(), FrameworkError> {
        let framework_components = self.framework_components(command)?;
        let mut app_components = self.state.components_mut();
        app_components.register(framework_components)
    }

    /// Post-configuration lifecycle callback.
    ///
    /// Rejects invalid configuration before any command runs.
    fn after_config(&mut self, config: Self::Cfg) -> Result<(), FrameworkError> {
        config
            .validate()
            .map_err(|e| FrameworkErrorKind::ConfigError.context(e))?;
        self.state.components_mut().after_config(&config)?;
        self.config.set_once(config);
        Ok(())
    }

    /// Get tracing configuration from command-line options.
    fn tracing_config(&self, command: &EntryPoint) -> trace::Config {
        if command.verbose {
            trace::Config::verbose()
        } else {
            trace::Config::default()
        }
    }
}
