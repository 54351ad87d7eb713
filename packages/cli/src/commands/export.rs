use crate::commands::pages::find_page;
use crate::config::Config;
use crate::site::load_or_seed;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitebuilder_editor::{export_page, write_export};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Page slug to export
    #[arg(default_value = "/")]
    pub slug: String,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let site = load_or_seed(&config, cwd)?;
    let page = find_page(&site, &args.slug)?;

    if args.stdout {
        println!("{}", export_page(page)?);
        return Ok(());
    }

    let out_dir = match args.out_dir {
        Some(dir) => std::path::PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };
    let path = write_export(page, &out_dir)?;
    println!("  {} {} → {}", "✓".green(), page.slug, path.display());
    Ok(())
}
