use std::path::Path;

use {
    anyhow::Result,
    clap::{Subcommand, ValueEnum},
    skillport_config::{Severity, SkillportConfig},
};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors/warnings.
    Check,
    /// Print the effective configuration, defaults included.
    Show {
        #[arg(long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Toml,
    Json,
}

pub fn handle_config(action: &ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Check => check(explicit),
        ConfigAction::Show { format } => show(explicit, *format),
    }
}

/// ANSI color codes.
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn load(explicit: Option<&Path>) -> Result<SkillportConfig> {
    match explicit {
        Some(path) => {
            eprintln!("Checking {}\n", path.display());
            skillport_config::load_config(path)
        },
        None => match skillport_config::find_config_file() {
            Some(path) => {
                eprintln!("Checking {}\n", path.display());
                skillport_config::load_config(&path)
            },
            None => {
                eprintln!("No config file found; checking defaults.\n");
                Ok(SkillportConfig::default())
            },
        },
    }
}

fn check(explicit: Option<&Path>) -> Result<()> {
    let config = load(explicit)?;
    let result = skillport_config::validate(&config);

    let mut errors = 0;
    let mut warnings = 0;
    for d in &result.diagnostics {
        let color = match d.severity {
            Severity::Error => {
                errors += 1;
                RED
            },
            Severity::Warning => {
                warnings += 1;
                YELLOW
            },
        };
        eprintln!("  {BOLD}{color}{}{RESET} {}: {}", d.severity, d.path, d.message);
    }

    if !result.diagnostics.is_empty() {
        eprintln!();
    }

    if errors == 0 && warnings == 0 {
        eprintln!("No issues found.");
    } else {
        eprintln!("{errors} error(s), {warnings} warning(s)");
    }

    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn show(explicit: Option<&Path>, format: Format) -> Result<()> {
    let config = match explicit {
        Some(path) => skillport_config::load_config(path)?,
        None => skillport_config::discover_and_load(),
    };
    print!("{}", render(&config, format)?);
    Ok(())
}

fn render(config: &SkillportConfig, format: Format) -> Result<String> {
    Ok(match format {
        Format::Toml => toml::to_string_pretty(config)?,
        Format::Json => format!("{}\n", serde_json::to_string_pretty(config)?),
    })
}
