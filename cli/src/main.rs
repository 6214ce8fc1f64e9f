//! markview CLI - markdown viewer core, headless

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use markview::{
    ExportOptions, JsonFileStore, LineMode, RecentFiles, RenderOptions, Settings,
};

#[derive(Parser)]
#[command(name = "markview")]
#[command(version)]
#[command(about = "Render markdown to styled HTML and export paginated PDF", long_about = None)]
struct Cli {
    /// Input markdown file (exported to PDF when no subcommand is given)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Key-value store file for settings and recent files
    #[arg(long, env = "MARKVIEW_STORE", global = true, value_name = "FILE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markdown to a styled HTML document
    Html {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Use the dark color palette
        #[arg(long)]
        dark: bool,

        /// Base font size in points (10-32)
        #[arg(long, value_name = "PT")]
        font_size: Option<f32>,
    },

    /// Export a file to a paginated PDF
    Pdf {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (input path with .pdf extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Treat the input as plain text (no markdown stripping)
        #[arg(long)]
        plain: bool,

        /// Maximum characters per wrapped line
        #[arg(long, default_value = "80", value_name = "CHARS")]
        wrap_width: usize,
    },

    /// Show line and page statistics for a file
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Manage the recent-file list
    Recent {
        #[command(subcommand)]
        action: RecentAction,
    },
}

#[derive(Subcommand)]
enum RecentAction {
    /// List recently opened files, newest first
    List,
    /// Clear the recent-file list
    Clear,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let store_path = cli.store.clone();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            dark,
            font_size,
        }) => cmd_html(
            &input,
            output.as_deref(),
            dark,
            font_size,
            store_path.as_deref(),
        ),
        Some(Commands::Pdf {
            input,
            output,
            plain,
            wrap_width,
        }) => cmd_pdf(
            &input,
            output.as_deref(),
            plain,
            wrap_width,
            store_path.as_deref(),
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Recent { action }) => cmd_recent(action, store_path.as_deref()),
        None => {
            if let Some(input) = cli.input {
                cmd_pdf(&input, None, false, 80, store_path.as_deref())
            } else {
                println!("{}", "Usage: markview <FILE>".yellow());
                println!("       markview --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    dark: bool,
    font_size: Option<f32>,
    store_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = stored_render_options(store_path)?;
    if dark {
        options = options.with_dark_mode(true);
    }
    if let Some(pt) = font_size {
        options = options.with_font_size(pt);
    }

    let html = markview::render_file(input, &options)?;
    record_recent(store_path, input)?;

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_pdf(
    input: &Path,
    output: Option<&Path>,
    plain: bool,
    wrap_width: usize,
    store_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.with_extension("pdf"));

    let mode = if plain {
        LineMode::Plain
    } else {
        LineMode::MarkdownStripped
    };
    let options = ExportOptions::new()
        .with_mode(mode)
        .with_wrap_width(wrap_width);

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading input...");
    let text = fs::read_to_string(input)?;
    pb.inc(1);

    pb.set_message("Paginating...");
    let pages = markview::export::to_pages(&text, &options)?;
    pb.inc(1);

    pb.set_message("Writing PDF...");
    let bytes = markview::export::write_pdf(&pages, &options.geometry)?;
    fs::write(&output, &bytes)?;
    pb.inc(1);

    pb.finish_with_message("Done!");
    record_recent(store_path, input)?;

    println!(
        "{} {} ({} pages, {} bytes)",
        "Saved to".green(),
        output.display(),
        pages.len(),
        bytes.len()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let options = ExportOptions::new();
    let pages = markview::export::to_pages(&text, &options)?;
    let lines: usize = pages.iter().map(|p| p.line_count()).sum();

    println!("{}", "Document information:".green().bold());
    println!("  {} {}", "file:".dimmed(), input.display());
    println!("  {} {}", "characters:".dimmed(), text.chars().count());
    println!("  {} {}", "printable lines:".dimmed(), lines);
    println!(
        "  {} {} ({} lines per page)",
        "pdf pages:".dimmed(),
        pages.len(),
        options.geometry.max_lines_per_page()
    );

    Ok(())
}

fn cmd_recent(
    action: RecentAction,
    store_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = store_path.ok_or("no store configured (use --store or MARKVIEW_STORE)")?;
    let mut store = JsonFileStore::open(path)?;

    match action {
        RecentAction::List => {
            let recent = RecentFiles::load(&store)?;
            if recent.is_empty() {
                println!("{}", "No recent files.".yellow());
            } else {
                println!("{}", "Recent files:".green().bold());
                for entry in recent.entries() {
                    println!(
                        "  {} {} ({})",
                        "-".dimmed(),
                        entry.name,
                        entry.opened_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
        RecentAction::Clear => {
            let mut recent = RecentFiles::load(&store)?;
            recent.clear();
            recent.save(&mut store)?;
            println!("{}", "Recent files cleared.".green());
        }
    }

    Ok(())
}

/// Render options seeded from the stored settings, when a store is in use.
fn stored_render_options(
    store_path: Option<&Path>,
) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    match store_path {
        Some(path) => {
            let store = JsonFileStore::open(path)?;
            Ok(Settings::load(&store)?.render_options())
        }
        None => Ok(RenderOptions::default()),
    }
}

fn record_recent(
    store_path: Option<&Path>,
    input: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = store_path {
        let mut store = JsonFileStore::open(path)?;
        let mut recent = RecentFiles::load(&store)?;
        recent.record(input);
        recent.save(&mut store)?;
    }
    Ok(())
}
