use crate::config::Config;
use crate::site::{load_or_seed, save_site};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use sitebuilder_editor::{Action, EditSession};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON file holding an array of editor actions
    pub script: PathBuf,

    /// Page to start editing on
    #[arg(short, long, default_value = "/")]
    pub page: String,

    /// Report without writing pages back
    #[arg(long)]
    pub dry_run: bool,
}

/// What replaying a script did
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyReport {
    pub applied: usize,
    pub ignored: usize,
}

/// Replay `actions` in a fresh session, starting on `start`
pub fn replay(session: &mut EditSession, start: &str, actions: &[Action]) -> ApplyReport {
    session.switch_page(start);

    let mut report = ApplyReport { applied: 0, ignored: 0 };
    for action in actions {
        if session.dispatch(action.clone()) {
            report.applied += 1;
        } else {
            report.ignored += 1;
        }
    }
    report
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let site = load_or_seed(&config, cwd)?;

    let script_path = PathBuf::from(cwd).join(&args.script);
    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("Cannot read script {}", script_path.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&script)
        .with_context(|| format!("Invalid action script {}", script_path.display()))?;

    println!(
        "{} {} actions from {}",
        "▶".bright_blue(),
        actions.len(),
        args.script.display()
    );

    let mut session = EditSession::from_pages(site, config.editor.clone());
    let report = replay(&mut session, &args.page, &actions);
    info!(applied = report.applied, ignored = report.ignored, "script replayed");

    println!("  {} {} applied", "✓".green(), report.applied);
    if report.ignored > 0 {
        println!("  {} {} had no effect", "○".yellow(), report.ignored);
    }

    if args.dry_run {
        println!("{}", "(dry run, nothing written)".dimmed());
        return Ok(());
    }

    let written = save_site(session.pages(), &config.get_pages_dir(cwd))?;
    println!("{} Wrote {} pages", "✅".green(), written.len());
    Ok(())
}
