//! # prudent-render
//!
//! Renders the Prudent Academy landing page to a static `index.html`.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in content into ./dist
//! prudent-render
//!
//! # Start an override file from the built-in copy, edit it, render with it
//! prudent-render --dump-content > content.toml
//! prudent-render --content content.toml --out-dir public
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use prudent_site::content::dangling_anchors;
use prudent_site::{SiteContent, render_page, write_site};

#[derive(Parser, Debug)]
#[command(name = "prudent-render")]
#[command(about = "Render the Prudent Academy landing page to static HTML")]
#[command(version)]
struct Args {
    /// Directory that receives index.html
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// TOML file overriding the built-in page content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Print the page to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print the effective content as TOML and exit
    #[arg(long)]
    dump_content: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let content = match &args.content {
        Some(path) => SiteContent::load(path)?,
        None => SiteContent::default(),
    };

    if args.dump_content {
        let toml = content.to_toml().context("Failed to serialize content")?;
        print!("{}", toml);
        return Ok(());
    }

    for link in dangling_anchors() {
        warn!(label = link.name, href = link.href, "navigation link has no landing section");
    }

    if args.stdout {
        let html = render_page(&content);
        std::io::stdout()
            .write_all(html.as_bytes())
            .context("Failed to write page to stdout")?;
        return Ok(());
    }

    let index = write_site(&args.out_dir, &content)?;
    info!("Landing page ready at {}", index.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[prudent-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
