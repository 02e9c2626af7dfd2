use crate::application::dto::SnapshotDto;
use crate::application::{CoordinatorEvent, EventBus, InstallerCoordinator, UseCaseContainer};
use crate::domain::entities::{AppConfig, OfficeApp, OutputFormat};
use crate::infrastructure::ConfigRepository;
use crate::infrastructure::helper::{HelperClient, HelperCommand};
use crate::presentation::view::render_text;
use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "addin-installer",
    version,
    about = "Install, remove and launch the Office add-in for Excel, Word and PowerPoint"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Installer helper executable, overriding the config file
    #[arg(long, global = true)]
    pub helper: Option<String>,

    /// Print the resulting state as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show installation status for every application (default)
    Status,
    /// Install the add-in into one application
    Install { app: OfficeApp },
    /// Remove the add-in from one application
    Uninstall { app: OfficeApp },
    /// Remove the add-in from every application that has it
    UninstallAll {
        /// Skip the confirmation requirement
        #[arg(short, long)]
        yes: bool,
    },
    /// Launch an Office application
    Open { app: OfficeApp },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(helper) = &self.helper {
            config.helper_program = helper.clone();
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
    }
}

/// Entry point for everything after argument parsing. Returns whether the requested
/// operation succeeded, so the caller can pick an exit code.
pub async fn run(cli: Cli, config_repository: &ConfigRepository) -> Result<bool> {
    let command = cli.command.clone().unwrap_or(Commands::Status);

    // Init must work even when the existing file no longer parses.
    if let Commands::Config {
        action: ConfigAction::Init { force },
    } = &command
    {
        init_config(*force, config_repository)?;
        return Ok(true);
    }

    let mut config = config_repository.load()?;
    cli.apply_overrides(&mut config);

    if let Commands::Config { action } = &command {
        config_command(action, &config, config_repository)?;
        return Ok(true);
    }

    let client = Arc::new(HelperClient::new(HelperCommand::new(
        config.helper_program.clone(),
        config.helper_args.clone(),
    )));
    let use_cases = Arc::new(UseCaseContainer::new(client.clone(), client));

    let coordinator = InstallerCoordinator::initialize(use_cases, EventBus::new()).await;
    coordinator.events().subscribe(|event| match event {
        CoordinatorEvent::AppChanged(app, state) if state.loading => {
            tracing::info!("{}: working...", app);
        }
        CoordinatorEvent::BulkStarted(apps) if !apps.is_empty() => {
            let names: Vec<&str> = apps.iter().map(|app| app.display_name()).collect();
            tracing::info!("Removing the add-in from {}", names.join(", "));
        }
        _ => {}
    });
    let ok = execute(&coordinator, &command, &config).await?;
    println!("{}", render(&coordinator, config.output)?);
    Ok(ok)
}

/// Runs one command against an initialized coordinator.
pub async fn execute(
    coordinator: &InstallerCoordinator,
    command: &Commands,
    config: &AppConfig,
) -> Result<bool> {
    let ok = match command {
        Commands::Status | Commands::Config { .. } => true,
        Commands::Install { app } => coordinator.install(*app).await.error().is_none(),
        Commands::Uninstall { app } => coordinator.uninstall(*app).await.error().is_none(),
        Commands::Open { app } => coordinator.open_app(*app).await.error().is_none(),
        Commands::UninstallAll { yes } => {
            if !coordinator.has_any_installed() {
                tracing::info!("The add-in is not installed anywhere");
                return Ok(true);
            }
            if config.confirm_before_uninstall_all && !yes {
                bail!("Refusing to remove the add-in from every application without --yes");
            }
            let processed = coordinator.uninstall_all().await;
            processed
                .iter()
                .all(|app| coordinator.app_state(*app).error().is_none())
        }
    };
    Ok(ok)
}

pub fn render(coordinator: &InstallerCoordinator, output: OutputFormat) -> Result<String> {
    let snapshot = SnapshotDto::from(coordinator);
    match output {
        OutputFormat::Text => Ok(render_text(&snapshot).trim_end().to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize status")
        }
    }
}

fn config_command(
    action: &ConfigAction,
    config: &AppConfig,
    config_repository: &ConfigRepository,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("# {}", config_repository.path().display());
            println!(
                "{}",
                serde_json::to_string_pretty(config).context("Failed to serialize config")?
            );
        }
        ConfigAction::Init { force } => init_config(*force, config_repository)?,
    }
    Ok(())
}

fn init_config(force: bool, config_repository: &ConfigRepository) -> Result<()> {
    if config_repository.path().exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            config_repository.path().display()
        );
    }
    config_repository.save(&AppConfig::default())?;
    println!("Wrote {}", config_repository.path().display());
    Ok(())
}
