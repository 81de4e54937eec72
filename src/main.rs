//! Rustructurizr CLI
//!
//! Usage:
//!   rustructurizr [OPTIONS]
//!
//! Options:
//!   -d, --demo <NAME>        Demo workspace to render [default: getting-started]
//!   -t, --theme <FILE>       Theme file whose styles are appended (TOML format)
//!   --default-theme          Append the built-in C4 theme
//!   -o, --output <FILE>      Write to a file instead of stdout
//!   -i, --indent <N>         Spaces per nesting level [default: 4]
//!   --spacing                Blank line between model sections and views
//!   --log-level <LEVEL>      Log level [default: warn]
//!   -l, --list               List demo names
//!   -h, --help               Print help

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, info, LevelFilter};

use rustructurizr::{demos, write_to, RenderConfig, Theme};

#[derive(Parser, Debug)]
#[command(name = "rustructurizr")]
#[command(about = "Render C4 architecture workspaces as Structurizr DSL")]
struct Cli {
    /// Demo workspace to render
    #[arg(short, long, default_value = "getting-started")]
    demo: String,

    /// Theme file whose styles are appended (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Append the built-in C4 theme
    #[arg(long)]
    default_theme: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per nesting level
    #[arg(short, long, default_value_t = 4)]
    indent: usize,

    /// Blank line between model sections and between views
    #[arg(long)]
    spacing: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// List demo names and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    if cli.list {
        for name in demos::NAMES {
            println!("{name}");
        }
        return;
    }

    let mut workspace = match demos::by_name(&cli.demo) {
        Some(Ok(workspace)) => workspace,
        Some(Err(e)) => {
            eprintln!("Error building demo '{}': {}", cli.demo, e);
            process::exit(1);
        }
        None => {
            eprintln!(
                "Unknown demo '{}'. Available: {}",
                cli.demo,
                demos::NAMES.join(", ")
            );
            process::exit(1);
        }
    };

    if cli.default_theme {
        Theme::default().apply(workspace.views_mut().styles_mut());
    }

    if let Some(path) = &cli.theme {
        let source = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading theme '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        match source.parse::<Theme>() {
            Ok(theme) => theme.apply(workspace.views_mut().styles_mut()),
            Err(e) => {
                eprint!("{}", e.format(&source, &path.display().to_string()));
                process::exit(1);
            }
        }
    }

    let config = RenderConfig::new()
        .with_indent_width(cli.indent)
        .with_section_spacing(cli.spacing);

    let result = match &cli.output {
        Some(path) => match File::create(path) {
            Ok(file) => write_to(&workspace, &config, io::BufWriter::new(file)),
            Err(e) => {
                eprintln!("Error creating '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => write_to(&workspace, &config, io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    info!(demo = cli.demo.as_str(); "Rendered workspace");
}
