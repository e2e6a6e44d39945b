//! CLI Adapter.

mod chat;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, SessionOptions};
use crate::domain::{AppError, Dialect, LauncherEntry};

#[derive(Parser)]
#[command(name = "maxgpt")]
#[command(version)]
#[command(
    about = "Generate and run 3ds Max scripts from natural-language requests",
    long_about = None
)]
struct Cli {
    /// Do not copy generated scripts to the system clipboard
    #[arg(long, global = true)]
    no_clipboard: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a script and print it without executing
    #[clap(visible_alias = "f")]
    Fetch {
        /// Target dialect (maxscript, python)
        #[arg(short, long, default_value = "maxscript")]
        lang: Dialect,
        /// Task description
        #[arg(required = true, trailing_var_arg = true)]
        task: Vec<String>,
    },
    /// Generate a script and execute it in the host
    #[clap(visible_alias = "x")]
    Exec {
        /// Target dialect (maxscript, python)
        #[arg(short, long, default_value = "maxscript")]
        lang: Dialect,
        /// Print the host script instead of running it
        #[arg(long)]
        dry_run: bool,
        /// Task description
        #[arg(required = true, trailing_var_arg = true)]
        task: Vec<String>,
    },
    /// Interactive multi-turn session
    #[clap(visible_alias = "c")]
    Chat {
        /// Initial dialect (maxscript, python)
        #[arg(short, long, default_value = "maxscript")]
        lang: Dialect,
        /// Print host scripts instead of running them
        #[arg(long)]
        dry_run: bool,
    },
    /// Execute an existing script file in the host
    Run {
        /// Script file (.ms, .mse, .mcr, .mzp, .py, .pyc)
        path: PathBuf,
        /// Print the host script instead of running it
        #[arg(long)]
        dry_run: bool,
    },
    /// Register toolbar launchers for script files
    Macro {
        /// Launcher category
        category: String,
        /// Display name; each file's stem is appended when several files are given
        name: String,
        /// Script files to expose
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print the registration scripts instead of running them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();
    let no_clipboard = cli.no_clipboard;

    let result: Result<(), AppError> = match cli.command {
        Commands::Fetch { lang, task } => run_fetch(&task.join(" "), lang, no_clipboard),
        Commands::Exec { lang, dry_run, task } => {
            run_exec(&task.join(" "), lang, SessionOptions { no_clipboard, dry_run })
        }
        Commands::Chat { lang, dry_run } => {
            chat::run_chat(lang, SessionOptions { no_clipboard, dry_run })
        }
        Commands::Run { path, dry_run } => run_file(&path, dry_run),
        Commands::Macro { category, name, files, dry_run } => {
            run_macro(&category, &name, &files, dry_run)
        }
        Commands::Config { command } => config::run_config(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("maxgpt=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_fetch(task: &str, dialect: Dialect, no_clipboard: bool) -> Result<(), AppError> {
    let settings = api::load_settings()?;
    let mut session =
        api::open_session(&settings, SessionOptions { no_clipboard, dry_run: true })?;
    let result = session.fetch(task, dialect)?;
    println!("{}", result.content());
    Ok(())
}

fn run_exec(task: &str, dialect: Dialect, options: SessionOptions) -> Result<(), AppError> {
    let settings = api::load_settings()?;
    let mut session = api::open_session(&settings, options)?;
    session.fetch_and_execute(task, dialect)?;
    eprintln!("✅ Execution complete");
    Ok(())
}

fn run_file(path: &std::path::Path, dry_run: bool) -> Result<(), AppError> {
    let settings = api::load_settings()?;
    let dialect = api::open_gateway(&settings, dry_run).run_file(path)?;
    eprintln!("✅ Executed {} as {}", path.display(), dialect);
    Ok(())
}

fn run_macro(
    category: &str,
    name: &str,
    files: &[PathBuf],
    dry_run: bool,
) -> Result<(), AppError> {
    let settings = api::load_settings()?;
    let entries: Vec<LauncherEntry> = if files.len() == 1 {
        vec![LauncherEntry::new(category, name, &files[0])]
    } else {
        files
            .iter()
            .map(|file| {
                let stem = file.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
                LauncherEntry::new(category, format!("{} {}", name, stem), file)
            })
            .collect()
    };

    let registered = api::register_launchers(&settings, &entries, dry_run);
    for uid in &registered {
        eprintln!("✅ Registered {}", uid);
    }
    if registered.len() < entries.len() {
        eprintln!("⚠️  Skipped {} of {} launchers", entries.len() - registered.len(), entries.len());
    }
    Ok(())
}
