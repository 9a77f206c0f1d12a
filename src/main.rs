//! vimview - render code with a Vim-style cursor or selection

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use vimview::{logging, Config, EditMode, OffsetStrategy, Result, SelectionOffsets, ViewError, ViewRenderer};

/// Render code as a Vim-style editor view
#[derive(Parser, Debug)]
#[command(name = "vimview", version, about = "Render code as a Vim-style editor view")]
struct Args {
    /// File to render (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Source language (HTML, JavaScript, Python, Java, Swift, CSS)
    #[arg(short, long)]
    language: Option<String>,

    /// Editing mode (normal, insert, visual)
    #[arg(short, long)]
    mode: Option<EditMode>,

    /// Cursor offset, or selection start, in characters
    #[arg(short, long, value_name = "N")]
    start: Option<usize>,

    /// Selection end in characters (exclusive)
    #[arg(short, long, value_name = "N")]
    end: Option<usize>,

    /// Select the first occurrence of this text instead of using offsets
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["start", "end"])]
    select: Option<String>,

    /// When offsets are applied (faithful, remapped)
    #[arg(long, value_name = "STRATEGY")]
    offsets: Option<OffsetStrategy>,

    /// Show a styled terminal preview instead of HTML
    #[arg(long)]
    preview: bool,

    /// Leave out the line-number column
    #[arg(long)]
    no_line_numbers: bool,

    /// Config file (default: ~/.vimview.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,
}

fn main() {
    logging::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(offsets) = args.offsets {
        config.offsets = offsets;
    }
    if args.no_line_numbers {
        config.line_numbers = false;
    }

    let renderer = ViewRenderer::from_config(&config);

    if args.list_languages {
        for name in renderer.highlighter().list_languages() {
            println!("{}", name);
        }
        return Ok(());
    }

    let content = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let selection = match &args.select {
        Some(text) => SelectionOffsets::locate(&content, text)
            .ok_or_else(|| ViewError::NoSelection(input_name(&args)))?,
        None => {
            let start = args.start.unwrap_or(0);
            SelectionOffsets::new(start, args.end.unwrap_or(start))
        }
    };

    let language = args
        .language
        .unwrap_or_else(|| config.default_language.name().to_string());
    let mode = args.mode.unwrap_or(config.default_mode);

    if args.preview {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        renderer.write_preview(&mut out, &content, &language, mode, selection)?;
    } else {
        println!("{}", renderer.render(&content, &language, mode, selection));
    }

    Ok(())
}

fn input_name(args: &Args) -> String {
    args.file
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |path| path.display().to_string())
}
