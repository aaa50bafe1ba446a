use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::admin::{ConfigAction, run_config, run_themes};
use commands::preview::{run_frames, run_render};

#[derive(Parser)]
#[command(name = "jsonpeek")]
#[command(about = "Styled, line-numbered JSON selection preview", long_about = None)]
struct Cli {
    /// Workspace root used for settings and the session log.
    #[arg(long, global = true, default_value = ".")]
    workspace: PathBuf,

    /// Echo session log lines to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    /// Machine-readable output where a command supports it.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one selection snapshot to an HTML document.
    Render {
        /// File holding the selection text; stdin when omitted.
        input: Option<PathBuf>,

        /// Where to write the rendered document.
        #[arg(short, long, default_value = "preview.html")]
        out: PathBuf,

        /// Directory of theme files offered alongside the built-ins.
        #[arg(long)]
        theme_dir: Option<PathBuf>,
    },
    /// Re-render a sequence of form-feed-separated snapshots from stdin,
    /// as if each were a selection-change event.
    Frames {
        #[arg(short, long, default_value = "preview.html")]
        out: PathBuf,

        #[arg(long)]
        theme_dir: Option<PathBuf>,
    },
    /// List available themes in the selector's display order.
    Themes {
        #[arg(long)]
        theme_dir: Option<PathBuf>,
    },
    /// Inspect or change persisted preferences.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    let Cli {
        workspace,
        verbose,
        json,
        command,
    } = Cli::parse();

    match command {
        Commands::Render {
            input,
            out,
            theme_dir,
        } => run_render(&workspace, input.as_deref(), &out, theme_dir.as_deref(), verbose),
        Commands::Frames { out, theme_dir } => {
            run_frames(&workspace, &out, theme_dir.as_deref(), verbose)
        }
        Commands::Themes { theme_dir } => run_themes(theme_dir.as_deref(), json),
        Commands::Config { action } => run_config(&workspace, action, json),
    }
}
