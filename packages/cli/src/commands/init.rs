use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::site::{save_site, seed_pages};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Pages directory
    #[arg(short, long, default_value = "pages")]
    pub pages_dir: String,

    /// Routes to seed (repeatable); defaults to the stock site
    #[arg(short, long = "route")]
    pub routes: Vec<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing SiteBuilder project...".bright_blue().bold());

    let config = Config {
        pages_dir: args.pages_dir.clone(),
        seed: args.routes,
        ..Default::default()
    };

    let pages = seed_pages(&config);
    let written = save_site(&pages, &config.get_pages_dir(cwd))?;
    for (page, path) in pages.iter().zip(&written) {
        let file = path.file_name().map(|f| f.to_string_lossy()).unwrap_or_default();
        println!("  {} {} → {}/{}", "✓".green(), page.slug, args.pages_dir, file);
    }

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: sitebuilder pages");
    println!("  2. Edit with: sitebuilder apply <script.json>");
    println!("  3. Run: sitebuilder export /");

    Ok(())
}
