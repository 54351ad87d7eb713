use crate::config::Config;
use crate::site::load_or_seed;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sitebuilder_schema::Page;

#[derive(Debug, Args)]
pub struct PagesArgs {
    /// Print the page list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Page slug, e.g. `/pricing`
    #[arg(default_value = "/")]
    pub slug: String,
}

pub fn pages(args: PagesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let site = load_or_seed(&config, cwd)?;

    if args.json {
        let summary: Vec<_> = site
            .iter()
            .map(|p| serde_json::json!({ "id": p.id, "name": p.name, "slug": p.slug, "sections": p.sections.len() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "📄 Pages".bright_blue().bold());
    for page in &site {
        println!(
            "  {:<14} {:<20} {}",
            page.slug.cyan(),
            page.name,
            format!("{} sections", page.sections.len()).dimmed()
        );
    }
    Ok(())
}

pub fn sections(args: SectionsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let site = load_or_seed(&config, cwd)?;
    let page = find_page(&site, &args.slug)?;

    println!("{} {} ({})", "🧩".bright_blue(), page.name.bold(), page.slug.cyan());
    for (i, section) in page.sections.iter().enumerate() {
        let marker = if section.visible { "✓".green() } else { "○".dimmed() };
        println!(
            "  {} {:>2}. {:<14} {:<12} {}",
            marker,
            i + 1,
            section.section_type().as_str(),
            section.variant,
            section.name
        );
    }
    Ok(())
}

pub fn find_page<'a>(site: &'a [Page], slug: &str) -> Result<&'a Page> {
    site.iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| anyhow!("No page with slug {}", slug))
}
