mod commands;
mod config;
mod site;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, export, init, pages, sections, ApplyArgs, ExportArgs, InitArgs, PagesArgs, SectionsArgs,
};
use tracing_subscriber::EnvFilter;

/// SiteBuilder CLI - build and edit website pages from the terminal
#[derive(Parser, Debug)]
#[command(name = "sitebuilder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new SiteBuilder project
    Init(InitArgs),

    /// List the pages of the site
    Pages(PagesArgs),

    /// List the sections of one page
    Sections(SectionsArgs),

    /// Export a page as JSON
    Export(ExportArgs),

    /// Replay a script of editor actions against the site
    Apply(ApplyArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Pages(args) => pages(args, &cwd),
        Command::Sections(args) => sections(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
