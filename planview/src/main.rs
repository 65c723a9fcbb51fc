//! planview - turn a product plan directory into structured data.
//!
//! Reads the Markdown and JSON documents under `product/`, the screen
//! designs under `app/components/sections/`, and prints what it finds:
//!
//! - `planview product` - every product-level document plus section progress
//! - `planview section <id>` - one section's spec, sample data and assets
//! - `planview image <id> <file>` - resolve a section screenshot on disk
//! - `planview parse <kind> [file]` - parse a single document (stdin if no file)

mod loader;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use loader::ProductDir;
use planview_syntax::correlate::correlate;
use planview_syntax::parser::{self, DocumentKind};
use planview_syntax::product::{ProductReport, SectionReport};
use regex::Regex;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RE_SECTION_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

#[derive(Parser)]
#[command(
    name = "planview",
    about = "Parse a product plan directory into structured data"
)]
struct Cli {
    /// Project root containing product/ and app/
    #[arg(short = 'r', long, default_value = ".", global = true)]
    root: PathBuf,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json", global = true)]
    format: String,

    /// Log debug details to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse every product-level document and report section progress
    Product {
        /// Report the export archive as available even if it is not built
        #[arg(long)]
        force_export: bool,
    },
    /// Gather one section's spec, sample data, screen designs and screenshots
    Section {
        /// Section id (the slug of its roadmap title)
        id: String,
    },
    /// Print the on-disk path of a section screenshot
    Image { section_id: String, filename: String },
    /// Parse a single document: overview, roadmap, data-model, shell, or section
    Parse {
        kind: DocumentKind,
        /// Input file. If omitted, reads from stdin.
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Command::Product { force_export } => product(&cli, force_export),
        Command::Section { ref id } => section(&cli, id),
        Command::Image {
            ref section_id,
            ref filename,
        } => image(&cli, section_id, filename),
        Command::Parse { kind, ref file } => parse(&cli, kind, file.as_deref()),
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn product(cli: &Cli, force_export: bool) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;
    let dir = ProductDir::new(&cli.root);

    let inputs = dir
        .product_inputs(force_export)
        .with_context(|| format!("failed to load product plan from {}", cli.root.display()))?;
    let report = ProductReport::build(inputs);
    log::debug!(
        "{} of {} sections have screen designs",
        report.section_stats.with_screen_designs,
        report.section_stats.total
    );

    print!("{}", renderer.render_product(&report)?);
    Ok(())
}

fn section(cli: &Cli, id: &str) -> Result<()> {
    if !RE_SECTION_ID.is_match(id) {
        bail!("invalid section id: {}", id);
    }
    let renderer = render::create_renderer(&cli.format)?;
    let dir = ProductDir::new(&cli.root);

    let inputs = dir
        .section_inputs(id)
        .with_context(|| format!("failed to load section {}", id))?;
    let report = SectionReport::new(correlate(id, inputs));

    print!("{}", renderer.render_section(&report)?);
    Ok(())
}

fn image(cli: &Cli, section_id: &str, filename: &str) -> Result<()> {
    let dir = ProductDir::new(&cli.root);
    match dir.resolve_image(section_id, filename) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => bail!("image not found: {}/{}", section_id, filename),
    }
}

/// Parse one document from a file or stdin.
fn parse(cli: &Cli, kind: DocumentKind, file: Option<&Path>) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;

    let input = match file {
        Some(path) => {
            let bytes =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            loader::decode_lossy(path, bytes)
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
            loader::decode_lossy(Path::new("<stdin>"), bytes)
        }
    };

    let doc = parser::parse_document(kind, &input);
    print!("{}", renderer.render_document(doc.as_ref())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn section_id_pattern() {
        assert!(RE_SECTION_ID.is_match("sales-and-marketing"));
        assert!(RE_SECTION_ID.is_match("v2_beta"));
        assert!(!RE_SECTION_ID.is_match("../etc"));
        assert!(!RE_SECTION_ID.is_match(""));
    }

    #[test]
    fn parse_kind_from_args() {
        let cli = Cli::try_parse_from(["planview", "parse", "data-model", "dm.md"]).unwrap();
        match cli.command {
            Command::Parse { kind, file } => {
                assert_eq!(kind, DocumentKind::DataModel);
                assert_eq!(file, Some(PathBuf::from("dm.md")));
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        assert!(Cli::try_parse_from(["planview", "parse", "readme"]).is_err());
    }
}
