mod config_commands;
mod item_commands;

use std::path::PathBuf;

use {
    anyhow::bail,
    clap::{Parser, Subcommand},
    skillport_config::{Severity, SkillportConfig},
    skillport_platforms::{ItemType, Platform},
    tracing::{debug, warn},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(
    name = "skillport",
    version,
    about = "Discover skills, agents and commands in a repository and port them between AI coding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Config file (overrides ./skillport.toml and ~/.config/skillport/).
    #[arg(long, global = true, env = "SKILLPORT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the items a repository working tree provides.
    Discover {
        /// Repository root.
        repo: PathBuf,
        /// Only items installable on this platform.
        #[arg(long)]
        platform: Option<Platform>,
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
        /// Also report skipped paths and notes.
        #[arg(long)]
        diagnostics: bool,
    },
    /// Print an item's raw content.
    Show {
        repo: PathBuf,
        /// Item key (relative path) or name.
        item: String,
        #[arg(long = "type")]
        item_type: Option<ItemType>,
    },
    /// Print an item converted for another platform.
    Transform {
        repo: PathBuf,
        /// Item key (relative path) or name.
        item: String,
        /// Target platform.
        #[arg(long)]
        to: Platform,
        /// Source platform (default: the item's first platform).
        #[arg(long)]
        from: Option<Platform>,
        #[arg(long = "type")]
        item_type: Option<ItemType>,
    },
    /// Check a content file against a platform's required fields.
    Validate {
        file: PathBuf,
        #[arg(long)]
        platform: Platform,
    },
    /// List supported platforms and their file conventions.
    Platforms,
    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: config_commands::ConfigAction,
    },
}

/// Logs go to stderr; stdout carries command output only.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Load the config named on the command line, or discover one.
/// Invalid configs are rejected; warnings are logged.
fn load_config(cli: &Cli) -> anyhow::Result<SkillportConfig> {
    let config = match cli.config {
        Some(ref path) => skillport_config::load_config(path)?,
        None => skillport_config::discover_and_load(),
    };

    let result = skillport_config::validate(&config);
    for diagnostic in &result.diagnostics {
        match diagnostic.severity {
            Severity::Error => eprintln!("{diagnostic}"),
            Severity::Warning => warn!(path = %diagnostic.path, "{}", diagnostic.message),
        }
    }
    if result.has_errors() {
        bail!("configuration is invalid");
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    debug!(version = env!("CARGO_PKG_VERSION"), "skillport starting");

    match cli.command {
        Commands::Platforms => item_commands::handle_platforms(),
        Commands::Validate { ref file, platform } => {
            item_commands::handle_validate(file, platform)
        },
        Commands::Config { ref action } => {
            config_commands::handle_config(action, cli.config.as_deref())
        },
        Commands::Discover {
            ref repo,
            platform,
            json,
            diagnostics,
        } => {
            let config = load_config(&cli)?;
            item_commands::handle_discover(&config, repo, platform, json, diagnostics)
        },
        Commands::Show {
            ref repo,
            ref item,
            item_type,
        } => {
            let config = load_config(&cli)?;
            item_commands::handle_show(&config, repo, item, item_type)
        },
        Commands::Transform {
            ref repo,
            ref item,
            to,
            from,
            item_type,
        } => {
            let config = load_config(&cli)?;
            item_commands::handle_transform(&config, repo, item, item_type, from, to)
        },
    }
}
