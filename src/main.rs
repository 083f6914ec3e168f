mod config;
mod replay;
mod report;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use board::autosave::{self, AutoSaver, FileStore, SlotStore, StoreError};
use board::codec::{self, Case, CodecError};
use board::config::ConfigError;
use board::engine::Editor;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::replay::ReplayError;
use crate::report::CaseSummary;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("case file error: {0}")]
    Codec(#[from] CodecError),
    #[error("auto-save slot error: {0}")]
    Store(#[from] StoreError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("replay failed: {0}")]
    Replay(#[from] ReplayError),
    #[error("no auto-saved case in {}", .0.display())]
    NoSnapshot(PathBuf),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pinboard", about = "Inspect, convert, and replay pinboard case files")]
struct Cli {
    /// Directory of the auto-save slot; overrides `PINBOARD_AUTOSAVE_DIR`.
    #[arg(long, global = true)]
    autosave_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of a case file (sealed or legacy plain JSON).
    Inspect { file: PathBuf },
    /// Write a case in the sealed on-disk form.
    Seal {
        input: PathBuf,
        /// Output path; defaults to the generated `<name>_<millis>.json`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write any case file as readable JSON.
    Unseal {
        input: PathBuf,
        /// Output path; defaults to stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Drive the editor with recorded events and save the result.
    Replay(ReplayArgs),
    /// Operate on the file-backed auto-save slot.
    Autosave(AutosaveCommand),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(default_value = "-", help = "Event file (JSON lines), or - for stdin")]
    events: String,

    /// Case to load before replaying.
    #[arg(long)]
    case: Option<PathBuf>,

    /// Output path; defaults to the generated `<name>_<millis>.json`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also snapshot the result into the auto-save slot.
    #[arg(long, default_value_t = false)]
    autosave: bool,
}

#[derive(Args, Debug)]
struct AutosaveCommand {
    #[command(subcommand)]
    command: AutosaveSubcommand,
}

#[derive(Subcommand, Debug)]
enum AutosaveSubcommand {
    /// Summarize the snapshot, if any.
    Show,
    /// Write the snapshot as a sealed case file.
    Restore {
        #[arg(long)]
        out: PathBuf,
    },
    /// Delete the snapshot.
    Clear,
}

fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        debug!(error = %e, "no .env file loaded");
    }

    let cli = Cli::parse();
    let mut config = CliConfig::from_env()?;
    if let Some(dir) = cli.autosave_dir {
        config.autosave_dir = dir;
    }

    match cli.command {
        Command::Inspect { file } => run_inspect(&file),
        Command::Seal { input, out } => run_seal(&input, out),
        Command::Unseal { input, out } => run_unseal(&input, out),
        Command::Replay(args) => run_replay(&config, args),
        Command::Autosave(command) => run_autosave(&config, command),
    }
}

fn run_inspect(file: &Path) -> Result<(), CliError> {
    let case = codec::decode_case(&read_text(file)?)?;
    print_json(&CaseSummary::of(&case))
}

fn run_seal(input: &Path, out: Option<PathBuf>) -> Result<(), CliError> {
    let case = codec::decode_case(&read_text(input)?)?;
    let saved = codec::save_file(&case, now_millis(OffsetDateTime::now_utc()))?;
    let path = out.unwrap_or_else(|| PathBuf::from(&saved.file_name));
    write_text(&path, &saved.contents)?;
    println!("{}", path.display());
    Ok(())
}

fn run_unseal(input: &Path, out: Option<PathBuf>) -> Result<(), CliError> {
    let case = codec::decode_case(&read_text(input)?)?;
    let pretty = codec::to_pretty_json(&case)?;
    match out {
        Some(path) => write_text(&path, &pretty),
        None => {
            println!("{pretty}");
            Ok(())
        }
    }
}

fn run_replay(config: &CliConfig, args: ReplayArgs) -> Result<(), CliError> {
    let mut editor = Editor::new(config.editor.clone());
    if let Some(path) = &args.case {
        editor.load_file(&read_text(path)?)?;
    }

    let mut reader: Box<dyn BufRead> = if args.events == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let path = PathBuf::from(&args.events);
        let file = File::open(&path).map_err(|source| CliError::Read { path, source })?;
        Box::new(BufReader::new(file))
    };
    let stats = replay::run(&mut editor, reader.as_mut())?;
    eprintln!("replayed {} events ({} notices)", stats.events, stats.notices);

    let now = OffsetDateTime::now_utc();
    let saved = editor.save_file(now)?;
    let path = args.out.unwrap_or_else(|| PathBuf::from(&saved.file_name));
    write_text(&path, &saved.contents)?;
    println!("{}", path.display());

    if args.autosave {
        let mut store = FileStore::new(&config.autosave_dir);
        let saver = AutoSaver::new(config.editor.autosave_interval, config.editor.autosave_key.clone(), Instant::now());
        let case = editor.snapshot_case(codec::iso_timestamp(now));
        if !saver.save(&mut store, &case)? {
            info!("nothing on the board; auto-save slot left as is");
        }
    }
    Ok(())
}

fn run_autosave(config: &CliConfig, command: AutosaveCommand) -> Result<(), CliError> {
    let mut store = FileStore::new(&config.autosave_dir);
    let key = config.editor.autosave_key.as_str();
    match command.command {
        AutosaveSubcommand::Show => {
            let case = restored(&store, key)?;
            print_json(&CaseSummary::of(&case))
        }
        AutosaveSubcommand::Restore { out } => {
            let case = restored(&store, key)?;
            write_text(&out, &codec::encode_case(&case)?)?;
            println!("{}", out.display());
            Ok(())
        }
        AutosaveSubcommand::Clear => {
            store.remove(key)?;
            info!(dir = %config.autosave_dir.display(), "auto-save slot cleared");
            Ok(())
        }
    }
}

fn restored(store: &FileStore, key: &str) -> Result<Case, CliError> {
    autosave::restore_offer(store, key).ok_or_else(|| CliError::NoSnapshot(store.path_for(key)))
}

fn now_millis(now: OffsetDateTime) -> i128 {
    now.unix_timestamp_nanos() / 1_000_000
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn write_text(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write { path: path.to_path_buf(), source })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
