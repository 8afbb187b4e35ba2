//! cim-tts-cli — synthesize Cook Islands Māori text from the command line
//!
//! Usage:
//!   cim-tts-cli say <text>... [--out <path>]   Synthesize text to a WAV file
//!   cim-tts-cli chars                          List insertable special characters
//!   cim-tts-cli about                          Show project information

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;

use cim_tts::{about, SynthesisConfig, SynthesisSession, SPECIAL_CHARACTERS};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "say" => cmd_say(&args[2..]).await,
        "chars" => cmd_chars(),
        "about" => cmd_about(),
        "version" | "--version" | "-V" => cmd_version(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!(
        r#"cim-tts-cli — Cook Islands Māori text-to-speech

USAGE:
    cim-tts-cli <COMMAND> [OPTIONS]

COMMANDS:
    say <text>... [--out <path>]    Synthesize text and write a WAV file
    chars                           List the insertable special characters
    about                           Show project information
    version                         Show version information
    help                            Show this help message

ENVIRONMENT:
    CIM_TTS_API_URL                 Synthesis endpoint URL (required for `say`)
    CIM_TTS_TIMEOUT_SECS            Request timeout override, in seconds"#
    );
}

async fn cmd_say(args: &[String]) -> anyhow::Result<()> {
    let mut out_path: Option<PathBuf> = None;
    let mut text_parts: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--out" {
            let path = args
                .get(i + 1)
                .context("--out requires a path argument")?;
            out_path = Some(PathBuf::from(path));
            i += 2;
        } else {
            text_parts.push(&args[i]);
            i += 1;
        }
    }

    let config = SynthesisConfig::from_env()?;
    let mut session = SynthesisSession::new(&config)?;
    if !text_parts.is_empty() {
        session.replace(text_parts.join(" "));
    }

    println!("Synthesizing: {}", session.draft_text());
    session.submit().await;

    if let Some(message) = session.error_message() {
        anyhow::bail!("{message}");
    }
    let audio = session
        .audio()
        .context("synthesis settled without audio or error")?;

    let path = out_path.unwrap_or_else(|| PathBuf::from(audio.file_name()));
    std::fs::write(&path, audio.bytes())
        .with_context(|| format!("failed writing {}", path.display()))?;
    println!(
        "Wrote {} ({} bytes, {})",
        path.display(),
        audio.bytes().len(),
        audio.mime_type()
    );
    Ok(())
}

fn cmd_chars() -> anyhow::Result<()> {
    for ch in SPECIAL_CHARACTERS {
        println!("{ch}");
    }
    Ok(())
}

fn cmd_about() -> anyhow::Result<()> {
    println!("{}", about::PROJECT_TITLE);
    println!();
    println!("{}", about::MODEL_DESCRIPTION);
    println!();
    println!("{}", about::CREDITS);
    println!();
    println!("{} — {}", about::PAPER_TITLE, about::PAPER_URL);
    Ok(())
}

fn cmd_version() -> anyhow::Result<()> {
    println!("cim-tts-cli {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
