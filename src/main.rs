//! tagdoc: generate documentation from tagged doc-comments.
//!
//! Two modes:
//!
//! - **stdin mode**: `tagdoc < comment.txt` parses one raw doc-comment
//! - **file mode**: `tagdoc -o docs units/*.json` renders one page per unit listing

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tagdoc::model::Unit;
use tagdoc::render::{self, RenderOptions};
use tagdoc::{lint, unit};

#[derive(Parser)]
#[command(
    name = "tagdoc",
    version,
    about = "Generate documentation from tagged doc-comments"
)]
struct Cli {
    /// Unit listings (JSON; glob patterns and directories supported).
    /// If omitted, reads one raw doc-comment from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default) or json
    #[arg(short = 'f', long, env = "TAGDOC_FORMAT", default_value = "markdown")]
    format: String,

    /// Language for fenced example blocks
    #[arg(long, env = "TAGDOC_CODE_LANG", default_value = "")]
    code_lang: String,

    /// Include units marked @private or @ignore in Markdown output
    #[arg(long)]
    show_private: bool,

    /// Warn about tags outside the known vocabulary
    #[arg(long)]
    warn_unknown: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// `RUST_LOG` decides the level; `-v` forces debug for this crate.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("tagdoc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn render_options(cli: &Cli) -> RenderOptions {
    RenderOptions {
        code_lang: cli.code_lang.clone(),
        show_private: cli.show_private,
    }
}

/// stdin mode: parse one doc-comment, write the rendered record to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    if cli.warn_unknown {
        for unknown in lint::unknown_tags(&input) {
            tracing::warn!(line = unknown.line, token = %unknown.token, "unknown tag");
        }
    }

    let record = tagdoc::parse(&input).context("failed to parse doc-comment")?;
    let renderer = render::create_renderer(&cli.format, render_options(cli))?;
    print!("{}", renderer.render_record(&record)?);
    Ok(())
}

/// file mode: one output page per unit listing.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = render::create_renderer(&cli.format, render_options(cli))?;
    let ext = renderer.file_extension();

    for path in expand_globs(&cli.files)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let units = match unit::load_units(&content) {
            Ok(units) => units,
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if cli.warn_unknown {
            warn_unknown_tags(&units);
        }

        let documented = unit::document_units(&units);
        if documented.is_empty() {
            tracing::debug!("no units in {}", path.display());
            continue;
        }

        let out_path = output_dir.join(format!("{}.{}", derive_output_name(&path), ext));
        let page = renderer.render(&documented)?;
        fs::write(&out_path, page)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::debug!(units = documented.len(), "wrote {}", out_path.display());
    }

    Ok(())
}

fn warn_unknown_tags(units: &[Unit]) {
    for unit in units {
        let Some(ref doc) = unit.docstring else {
            continue;
        };
        for unknown in lint::unknown_tags(doc) {
            tracing::warn!(
                unit = %unit.name,
                line = unknown.line,
                token = %unknown.token,
                "unknown tag"
            );
        }
    }
}

/// File extensions recognized as unit listings.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for unit listings.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                let supported = p
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
                if p.is_file() && supported {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// "api/widgets.json" → "widgets"
fn derive_output_name(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string())
}
