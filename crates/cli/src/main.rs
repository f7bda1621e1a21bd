mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use noticeblocks_core::config::loader::{ConfigLoader, default_config_path};
use noticeblocks_core::config::types::ResolvedConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "nblk", version, about = "Render Liquid templates with notice callout blocks")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a template, expanding notice blocks
    Render(RenderArgs),

    /// List the registered notice block tags
    Kinds,

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template file to render ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Convert notice bodies marked markdown="1" to HTML
    #[arg(long)]
    pub markdown: bool,

    /// Template variable (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty variable name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Load config, or report the failure the way every command does and exit.
pub(crate) fn load_config(config: Option<&Path>, command: &str) -> ResolvedConfig {
    match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL nblk {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let name = match cli.command {
        Commands::Render(_) => "render",
        Commands::Kinds => "kinds",
        Commands::Doctor => "doctor",
    };
    let cfg = load_config(cli.config.as_deref(), name);
    logging::init(&cfg.logging);

    match cli.command {
        Commands::Render(args) => cmd::render::run(&cfg, &args),
        Commands::Kinds => cmd::kinds::run(),
        Commands::Doctor => cmd::doctor::run(&cfg),
    }
    Ok(())
}
