use crate::config::{Config, OutputFormat};
use crate::registry::IdRegistry;
use crate::traits::{FileSystem, Output, RealFileSystem, TerminalOutput};
#[cfg(test)]
use crate::traits::{MockFileSystem, MockOutput};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub fs: Arc<dyn FileSystem>,
    pub output: Arc<dyn Output>,
    pub registry: Arc<IdRegistry>,
    pub config: Arc<Config>,
    /// Output format after applying the `--output` flag over the config
    pub format: OutputFormat,
}

impl Context {
    /// Create a new context with real implementations, loading the config file
    pub fn new(config_path: Option<&Path>, format: Option<OutputFormat>) -> Result<Self> {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let config = Config::load(fs.as_ref(), config_path)?;
        let registry = config.registry()?;

        Ok(Self {
            fs,
            output: Arc::new(TerminalOutput),
            registry: Arc::new(registry),
            format: format.unwrap_or(config.spec.output),
            config: Arc::new(config),
        })
    }

    /// Create a new context with mock implementations (for testing)
    #[cfg(test)]
    pub fn test() -> Self {
        Self::test_with(
            Arc::new(MockFileSystem::new()),
            Arc::new(MockOutput::new()),
            Config::default(),
        )
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    pub fn test_with(fs: Arc<dyn FileSystem>, output: Arc<dyn Output>, config: Config) -> Self {
        let registry = config.registry().unwrap();

        Self {
            fs,
            output,
            registry: Arc::new(registry),
            format: config.spec.output,
            config: Arc::new(config),
        }
    }

    /// Whether commands should print JSON
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            output: Arc::clone(&self.output),
            registry: Arc::clone(&self.registry),
            config: Arc::clone(&self.config),
            format: self.format,
        }
    }
}
