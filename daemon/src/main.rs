//! certify: command-line entry point for the certificate verification desk.

mod render;
mod shell;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use certify_app::{init_logging, App, AppConfig, Locale};
use certify_store::{CertificateStore, UniversityStore};
use clap::{Parser, Subcommand, ValueEnum};

use crate::shell::{Shell, TypedScanner};

#[derive(Parser)]
#[command(name = "certify", about = "Academic certificate verification", version)]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "CERTIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Seed file to load instead of the built-in records.
    #[arg(long, env = "CERTIFY_SEED_FILE")]
    seed_file: Option<PathBuf>,

    /// Simulated lookup latency in milliseconds (0 disables it).
    #[arg(long, env = "CERTIFY_LOOKUP_DELAY_MS")]
    lookup_delay_ms: Option<u64>,

    /// Display language: "en" or "ar".
    #[arg(long, env = "CERTIFY_LOCALE")]
    locale: Option<Locale>,

    /// Administrator username.
    #[arg(long, env = "CERTIFY_ADMIN_USERNAME")]
    admin_username: Option<String>,

    /// Administrator password.
    #[arg(long, env = "CERTIFY_ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,

    /// Address recorded on audit entries.
    #[arg(long, env = "CERTIFY_CLIENT_ADDRESS")]
    client_address: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CERTIFY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CERTIFY_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify one certificate id and exit.
    Verify {
        /// Certificate id, any casing.
        id: String,
    },
    /// List records.
    List {
        what: ListTarget,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Interactive verification desk and administrator shell.
    Shell,
}

#[derive(Clone, Copy, ValueEnum)]
enum ListTarget {
    Universities,
    Certificates,
}

impl Cli {
    /// File config (or defaults) with flag and env overrides applied.
    fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_toml_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => AppConfig::default(),
        };
        if let Some(seed_file) = &self.seed_file {
            config.seed_file = Some(seed_file.clone());
        }
        if let Some(delay) = self.lookup_delay_ms {
            config.lookup_delay_ms = delay;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(username) = &self.admin_username {
            config.admin_username = username.clone();
        }
        if let Some(password) = &self.admin_password {
            config.admin_password = password.clone();
        }
        if let Some(address) = &self.client_address {
            config.client_address = address.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.log_format = format.clone();
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_logging(config.log_format(), &config.log_level).context("initialising logging")?;

    let mut app = App::from_config(config).context("starting application")?;
    let stdout = io::stdout();

    match cli.command {
        Command::Verify { id } => {
            let mut out = stdout.lock();
            match app.verify(&id).await {
                Ok(_) => {
                    if let Some(view) = app.details() {
                        render::view(&mut out, &view, app.locale())?;
                    }
                }
                Err(e) => {
                    writeln!(out, "{}", render::describe(&e, app.locale()))?;
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::List { what, json } => {
            let mut out = stdout.lock();
            let records = app.records();
            match (what, json) {
                (ListTarget::Universities, false) => {
                    render::universities(&mut out, &records.list_universities())?
                }
                (ListTarget::Certificates, false) => {
                    render::certificates(&mut out, &records.list_certificates())?
                }
                (ListTarget::Universities, true) => {
                    serde_json::to_writer_pretty(&mut out, &records.list_universities())?;
                    writeln!(out)?;
                }
                (ListTarget::Certificates, true) => {
                    serde_json::to_writer_pretty(&mut out, &records.list_certificates())?;
                    writeln!(out)?;
                }
            }
        }
        Command::Shell => {
            tracing::info!("starting interactive shell");
            let app = app.with_scanner(Box::new(TypedScanner::default()));
            let stdin = io::stdin();
            let mut shell = Shell::new(app, stdin.lock(), stdout.lock());
            shell.run().await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
