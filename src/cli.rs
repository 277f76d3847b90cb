//! Command-line front end for inspecting and validating themes

use std::io::Write;
use std::path::PathBuf;

use capthemes_core::{Error, Result, Role, RoleColors, Theme};
use capthemes_registry::{init_config_dir, load_registry, overrides_path, ThemeRegistry};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info, warn};

/// Caption Themes - inspect and validate caption color themes
#[derive(Parser, Debug)]
#[command(name = "capthemes")]
#[command(about = "Inspect and validate caption color themes", long_about = None)]
pub struct Args {
    /// Project directory holding `.capthemes/themes.toml` (defaults to cwd)
    #[arg(long, value_name = "PATH", global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered theme names
    List {
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Show the colors of a theme (unknown names fall back to "default")
    Show {
        /// Theme name
        name: String,

        /// Only show one role: primary or secondary
        #[arg(long)]
        role: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate built-in themes together with the project overrides
    Check {
        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create a starter `.capthemes/themes.toml`
    Init,
}

/// Summary printed by `check`
#[derive(Debug, Serialize)]
struct CheckReport {
    themes: usize,
    overrides: Option<PathBuf>,
}

/// Main entry point: install error reporting and logging, then execute.
pub fn run(args: Args) -> Result<()> {
    color_eyre::install().map_err(|e| Error::init(e.to_string()))?;
    capthemes_core::logging::init()?;

    info!("capthemes starting: {:?}", args.command);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let result = execute(&args, &mut stdout.lock(), &mut stderr.lock());

    if let Err(ref e) = result {
        error!("Command failed: {:?}", e);
    }
    result
}

/// Execute a parsed command, writing its output to `out`.
///
/// Notices that are not part of the output (such as a theme falling back to
/// "default") go to `notices`.
pub fn execute(args: &Args, out: &mut impl Write, notices: &mut impl Write) -> Result<()> {
    let project = args
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    match &args.command {
        Command::List { json } => {
            let registry = load_registry(&project)?;
            let names = registry.list_theme_names();
            if *json {
                writeln!(out, "{}", serde_json::to_string(&names)?)?;
            } else {
                for name in names {
                    writeln!(out, "{name}")?;
                }
            }
        }
        Command::Show { name, role, json } => {
            let registry = load_registry(&project)?;
            show(&registry, name, role.as_deref(), *json, out, notices)?;
        }
        Command::Check { json } => {
            let registry = load_registry(&project)?;
            let path = overrides_path(&project);
            let report = CheckReport {
                themes: registry.len(),
                overrides: path.exists().then_some(path),
            };
            if *json {
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                write_check(&report, out)?;
            }
        }
        Command::Init => {
            let path = init_config_dir(&project)?;
            writeln!(out, "Theme overrides: {}", path.display())?;
        }
    }

    Ok(())
}

fn show(
    registry: &ThemeRegistry,
    name: &str,
    role: Option<&str>,
    json: bool,
    out: &mut impl Write,
    notices: &mut impl Write,
) -> Result<()> {
    // Parse the role before anything is printed so a bad role prints nothing
    let role = role.map(str::parse::<Role>).transpose()?;

    if !registry.contains(name) {
        warn!("Unknown theme '{}' requested", name);
        writeln!(
            notices,
            "Theme '{}' not found, showing '{}'",
            name,
            registry.default_theme().name
        )?;
    }
    let theme = registry.get_theme(name);

    match (role, json) {
        (Some(role), true) => {
            writeln!(out, "{}", serde_json::to_string_pretty(theme.role(role))?)?
        }
        (Some(role), false) => write_role(role, theme.role(role), out)?,
        (None, true) => writeln!(out, "{}", serde_json::to_string_pretty(theme)?)?,
        (None, false) => write_theme(theme, out)?,
    }
    Ok(())
}

fn write_theme(theme: &Theme, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", theme.name)?;
    for role in Role::ALL {
        write!(out, "  ")?;
        write_role(role, theme.role(role), out)?;
    }
    Ok(())
}

fn write_role(role: Role, colors: &RoleColors, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{:<10} color {}  shadow {}",
        role.as_str(),
        colors.color,
        colors.shadow
    )?;
    Ok(())
}

fn write_check(report: &CheckReport, out: &mut impl Write) -> Result<()> {
    writeln!(out, "✅ {} themes valid", report.themes)?;
    match report.overrides.as_deref() {
        Some(path) => writeln!(out, "   overrides: {}", path.display())?,
        None => writeln!(out, "   overrides: none")?,
    }
    Ok(())
}
