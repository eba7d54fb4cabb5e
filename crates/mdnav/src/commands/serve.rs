//! `mdnav serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdnav_config::{CliSettings, Config};
use mdnav_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mdnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// HTML template with a `{{content}}` placeholder (overrides config).
    #[arg(long)]
    template: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Enable verbose output (request and resolution logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
            template_path: self.template,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.field(
            "Listening on",
            format!("http://{}:{}", config.server.host, config.server.port),
        );
        output.field("Content directory", config.content.dir.display());
        output.field("Template", config.template_path.display());
        if let Some(path) = &config.config_path {
            output.field("Config", path.display());
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
