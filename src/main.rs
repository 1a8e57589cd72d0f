// ── hilite CLI ────────────────────────────────────────────────────────────────
//
// Reads a snippet from a file or stdin, highlights it and writes the chosen
// rendering to stdout.  Logs go to stderr so they never mix with output.
//
// Precedence: command-line flags > settings file > built-in defaults.

use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use hilite::{
    config::{self, Settings},
    highlight::CommentMode,
    render::{self, html, OutputFormat, RenderOptions},
};

#[derive(Parser)]
#[command(name = "hilite", about = "Highlight a code snippet", version)]
struct Cli {
    /// Source file; stdin when omitted.
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Ansi)]
    format: OutputFormat,

    /// Header label; defaults to the input file name.
    #[arg(long)]
    label: Option<String>,

    #[arg(long = "line-numbers")]
    line_numbers: bool,

    #[arg(long)]
    dark: bool,

    /// Settings file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not treat `//` inside a double-quoted string as a comment.
    #[arg(long = "strings-hide-comments")]
    strings_hide_comments: bool,

    /// Write a default settings file to PATH and exit.
    #[arg(long = "init-config", value_name = "PATH")]
    init_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    if let Some(path) = &cli.init_config {
        config::save(path, &Settings::default())
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote default settings");
        return Ok(());
    }

    let mut settings = match &cli.config {
        Some(path) => config::load(path).with_context(|| format!("reading {}", path.display()))?,
        None => config::load_default().unwrap_or_default(),
    };
    if cli.strings_hide_comments {
        settings.comment_mode = CommentMode::OutsideStrings;
    }

    let source = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };
    debug!(bytes = source.len(), "read input");

    let label = cli.label.clone().or_else(|| {
        cli.file
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    });
    let options = RenderOptions {
        label,
        line_numbers: cli.line_numbers || settings.line_numbers,
        dark: cli.dark || settings.dark_mode,
    };

    let block = settings.highlighter().highlight(&source);
    let rendered = render::render(&block, cli.format, &options)?;

    let mut stdout = io::stdout().lock();
    if cli.format == OutputFormat::Html {
        writeln!(stdout, "<style>\n{}</style>", html::stylesheet(options.dark))?;
    }
    stdout.write_all(rendered.as_bytes())?;
    if cli.format == OutputFormat::Ansi || cli.format == OutputFormat::Json {
        writeln!(stdout)?;
    }
    Ok(())
}
