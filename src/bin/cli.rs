use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use music_file_tag_masks as lib;
use lib::checksum::{fill_default_comment, Sha256Checksum};
use lib::config::Config;
use lib::mask::{self, MaskKind};
use lib::models::ExtractionItem;
use std::path::{Path, PathBuf};
use tracing::subscriber as tracing_subscriber_global;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "music-file-tag-masks", version)]
struct Cli {
    /// Path to config TOML
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Fill,
    Rename,
}

impl From<KindArg> for MaskKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Fill => MaskKind::TagFill,
            KindArg::Rename => MaskKind::Rename,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a mask is well formed
    CheckMask {
        #[arg(long, value_enum, default_value = "fill")]
        kind: KindArg,
        mask: String,
    },
    /// Fill tag fields from file paths
    Extract {
        #[arg(long)]
        mask: String,
        /// Descend into directories
        #[arg(long)]
        recursive: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        paths: Vec<PathBuf>,
    },
    /// Show the path each file would be renamed to (nothing is renamed)
    Rename {
        #[arg(long)]
        mask: String,
        #[arg(long)]
        recursive: bool,
        files: Vec<PathBuf>,
    },
    /// Run the configured text pipeline over each argument
    Process { text: Vec<String> },
    /// Convert between integers and roman numerals
    Roman { value: String },
    /// List the saved masks and whether they are valid
    Masks,
    /// Validate config file and exit
    ConfigValidate,
}

/// Resolve config path: explicit --config, else the per-user config file if
/// it exists, else built-in defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        return Config::from_path(p).with_context(|| format!("loading config from {}", p.display()));
    }
    if let Some(dir) = dirs::config_dir() {
        let p = dir.join("music-file-tag-masks").join("config.toml");
        if p.exists() {
            return Config::from_path(&p).with_context(|| format!("loading config from {}", p.display()));
        }
    }
    Ok(Config::default())
}

/// Initialize log->tracing bridge and structured logging:
/// stderr always, plus a daily-rotated file when a log directory is configured.
fn init_logging(cfg: &Config) -> Option<WorkerGuard> {
    let _ = LogTracer::init();

    // Honor RUST_LOG if set, otherwise default to info.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &cfg.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "music-tag-masks.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(fmt::layer().with_writer(non_blocking)), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer);

    if let Err(e) = tracing_subscriber_global::set_global_default(subscriber) {
        eprintln!("failed to set global tracing subscriber: {}", e);
    }
    guard
}

/// Expand directories (when recursive) into the files below them.
fn collect_files(paths: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if p.is_dir() {
            if !recursive {
                warn!("Skipping directory {:?} (use --recursive)", p);
                continue;
            }
            let mut files: Vec<PathBuf> = WalkDir::new(p)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.path().to_path_buf())
                .collect();
            files.sort();
            out.extend(files);
        } else {
            out.push(p.clone());
        }
    }
    out
}

fn print_items(path: &Path, items: &[ExtractionItem]) {
    println!("{}", path.display());
    for item in items {
        println!("  %{} = {}", item.code, item.text);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;
    let _guard = init_logging(&cfg);

    match cli.command {
        Commands::CheckMask { kind, mask: m } => match mask::validate(&m, kind.into()) {
            Ok(()) => println!("OK"),
            Err(e) => {
                eprintln!("Invalid mask: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Extract { mask: m, recursive, json, paths } => {
            let mut results = Vec::new();
            for path in collect_files(&paths, recursive) {
                let path_str = path.to_string_lossy();
                let extraction = lib::extract::extract_from_file_path(&m, &path_str, &cfg.scanner)?;
                if json {
                    results.push(serde_json::json!({ "path": path_str, "extraction": extraction }));
                } else {
                    print_items(&path, &extraction.items);
                }
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            }
        }
        Commands::Rename { mask: m, recursive, files } => {
            for file in collect_files(&files, recursive) {
                let mut fields = match lib::tags::read_fields(&file) {
                    Ok(f) => f,
                    Err(e) => {
                        warn!("Failed to read tags from {:?}: {}", file, e);
                        continue;
                    }
                };
                fill_default_comment(&mut fields, &file, &Sha256Checksum, cfg.default_comment_checksum)?;
                let current_dir = file
                    .parent()
                    .map(|p| p.to_string_lossy().into_owned())
                    .filter(|d| !d.is_empty());
                let generated = lib::generate::generate(&m, &fields, current_dir.as_deref(), &cfg.rename)
                    .with_context(|| format!("generating a name for {}", file.display()))?;
                match generated {
                    Some(mut target) => {
                        if let Some(ext) = file.extension().and_then(|e| e.to_str()) {
                            target.push('.');
                            target.push_str(ext);
                        }
                        println!("{} -> {}", file.display(), target);
                    }
                    None => info!("Mask produced no name for {:?}", file),
                }
            }
        }
        Commands::Process { text } => {
            for t in text {
                println!("{}", cfg.process.transform.apply(&t));
            }
        }
        Commands::Roman { value } => match value.trim().parse::<u32>() {
            Ok(n) => println!("{}", lib::roman::int_to_roman(n)?),
            Err(_) => println!("{}", lib::roman::roman_to_int(value.trim())?),
        },
        Commands::Masks => {
            for (kind, masks) in [(MaskKind::TagFill, &cfg.tag_masks), (MaskKind::Rename, &cfg.rename_masks)] {
                println!("{:?}:", kind);
                for m in masks {
                    let status = match mask::validate(m, kind) {
                        Ok(()) => "ok".to_string(),
                        Err(e) => e.to_string(),
                    };
                    println!("  {}  [{}]", m, status);
                }
            }
        }
        Commands::ConfigValidate => {
            let Some(path) = cli.config.as_deref() else {
                bail!("config-validate needs --config");
            };
            match Config::from_path(path) {
                Ok(_) => println!("OK"),
                Err(e) => {
                    eprintln!("Config validation failed: {}", e);
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}
