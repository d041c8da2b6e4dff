//! CLI host: load a transcript file, export it, write the artifacts.

use log::warn;
use std::path::{Path, PathBuf};
use transcript_export::export::{export, ExportFormat};
use transcript_export::project::load_transcript;
use transcript_export::sink::save_artifact;

const USAGE: &str = "usage: transcript-export <transcript.json> <txt|json|srt|all> [output-dir]";

/// Log directory under the platform data dir.
fn log_dir_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("transcript-export").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".").join("logs"))
}

fn init_logger() -> Result<PathBuf, fern::InitError> {
    let log_dir = log_dir_path();
    std::fs::create_dir_all(&log_dir).ok();
    let log_file = log_dir.join("transcript-export.log");

    let format = |out: fern::FormatCallback<'_>, message: &std::fmt::Arguments<'_>, record: &log::Record| {
        out.finish(format_args!(
            "[{}][{}][{}][{:?}] {}",
            chrono::Local::now().format("%Y-%m-%d"),
            chrono::Local::now().format("%H:%M:%S"),
            record.target(),
            record.level(),
            message
        ))
    };

    fern::Dispatch::new()
        .format(format)
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .chain(fern::log_file(&log_file)?)
        .apply()?;

    Ok(log_file)
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, format, out_dir) = match args.as_slice() {
        [input, format] => (input, format, None),
        [input, format, out] => (input, format, Some(PathBuf::from(out))),
        _ => return Err(USAGE.to_string()),
    };

    let input = Path::new(input);
    let transcript = load_transcript(input)?;
    if transcript.is_busy {
        warn!("[export] transcript is marked busy (more segments may still arrive); exporting anyway");
    }

    let out_dir = match out_dir {
        Some(dir) => dir,
        None => match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };

    let formats = match format.as_str() {
        "all" => vec![ExportFormat::Txt, ExportFormat::Json, ExportFormat::Srt],
        name => vec![
            ExportFormat::from_name(name).ok_or_else(|| format!("Unsupported format: {}", name))?,
        ],
    };

    for format in formats {
        let artifact = export(format, Some(&transcript));
        let path = save_artifact(&out_dir, &artifact)?;
        println!("{}", path.to_string_lossy());
    }

    Ok(())
}

fn main() {
    let _log_path = init_logger().ok();
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
