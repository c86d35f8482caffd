use std::{path::Path, time::Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};

use folio::{
    manifest,
    site::{copy_assets, Site, DEFAULT_PAGES},
    ui::clipboard::{CopyButton, SystemClipboard},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the gallery pages and copy the site's assets.
    Build {
        #[arg(help = "The source directory.")]
        source: String,
        #[arg(short, long, default_value = "public", help = "The destination directory")]
        dest: String,
        #[arg(short, long = "page", help = "Page to build (repeatable)")]
        pages: Vec<String>,
    },
    /// Put an entry's transcript on the clipboard.
    Copy {
        #[arg(help = "The source directory.")]
        source: String,
        author: String,
        folder: String,
    },
}

fn build(source: &str, dest: &str, pages: Vec<String>) -> anyhow::Result<()> {
    log::info!("Beginning to process `{}`", source);
    log::info!("Outputting to `{}`", dest);

    let pages = if pages.is_empty() {
        DEFAULT_PAGES.iter().map(|page| page.to_string()).collect()
    } else {
        pages
    };

    let site = Site::open(Path::new(source))?;
    copy_assets(Path::new(source), Path::new(dest))?;
    site.build_pages(Path::new(dest), &pages)?;

    Ok(())
}

fn copy(source: &str, author: &str, folder: &str) -> anyhow::Result<()> {
    let site = Site::open(Path::new(source))?;
    let author = site
        .config()
        .author(author)
        .with_context(|| format!("unknown author `{}`", author))?;

    let text = manifest::folder_dir(site.config(), author, folder).join(manifest::TEXT_FILE);
    let mut button = CopyButton::new(&text);
    let mut clipboard = SystemClipboard::new()?.holding();

    if let Err(err) = button.activate(site.fetcher(), &mut clipboard, Instant::now()) {
        log::error!("Error copying text: {}", err);
        anyhow::bail!(err.user_message());
    }

    println!("Copied!");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize Logging.
    let log_environ = env_logger::Env::new()
        .filter("FOLIO_LOG")
        .write_style("FOLIO_LOG_STYLE");
    let mut log_builder = env_logger::Builder::new();

    log_builder.filter_level(log::LevelFilter::Info);
    log_builder.parse_env(log_environ);
    log_builder.init();

    // Parse Arguments.
    let args = Args::parse();

    match args.command {
        Command::Build {
            source,
            dest,
            pages,
        } => build(&source, &dest, pages)?,
        Command::Copy {
            source,
            author,
            folder,
        } => copy(&source, &author, &folder)?,
    }

    log::info!("Done.");

    Ok(())
}
