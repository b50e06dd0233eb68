//! propbook CLI Binary
//!
//! Interactive shell and scripted runner for the propbook contact book.

use anyhow::{bail, Context};
use clap::Parser;
use propbook::cli::{
    format_transcript_json, format_transcript_text, map_error, Cli, Commands, OutputFormat,
    RunContext, TranscriptLine,
};
use propbook::command::Command;
use propbook::config::{BookConfig, ConfigLoader};
use propbook::logging::{init_logging, resolve_log_file_path, LoggingConfig};
use std::io::{BufRead, IsTerminal};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load_with(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e, std::io::stderr().is_terminal()));
            process::exit(1);
        }
    };

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("propbook starting");

    if let Err(e) = run(&cli, &config) {
        error!("propbook failed: {:#}", e);
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, config: &BookConfig) -> anyhow::Result<()> {
    if let Err(errors) = config.validate() {
        let details: Vec<String> = errors.iter().map(|e| format!("  - {}", e)).collect();
        bail!("Invalid configuration:\n{}", details.join("\n"));
    }

    let context = RunContext::from_config(config);
    match cli.command.clone().unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&context),
        Commands::Run { lines, format } => {
            print_transcript(run_lines(&context, lines.iter().map(String::as_str)), format)
        }
        Commands::Script { path, format } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            let lines = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'));
            print_transcript(run_lines(&context, lines), format)
        }
    }
}

/// Execute lines in order until one of them is `exit`.
fn run_lines<'a>(context: &RunContext, lines: impl Iterator<Item = &'a str>) -> Vec<TranscriptLine> {
    let mut transcript = Vec::new();
    for line in lines {
        let (ok, output, exit) = match context.parse_line(line) {
            Ok(command) => {
                let exit = command == Command::Exit;
                match context.execute(&command) {
                    Ok(output) => (true, output, exit),
                    Err(e) => (false, map_error(&e, false), exit),
                }
            }
            Err(e) => (false, map_error(&e, false), false),
        };
        transcript.push(TranscriptLine {
            input: line.to_string(),
            ok,
            output,
        });
        if exit {
            break;
        }
    }
    transcript
}

fn print_transcript(transcript: Vec<TranscriptLine>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", format_transcript_text(&transcript)),
        OutputFormat::Json => println!("{}", format_transcript_json(&transcript)?),
    }
    Ok(())
}

fn run_shell(context: &RunContext) -> anyhow::Result<()> {
    let color = std::io::stdout().is_terminal();
    if std::io::stdin().is_terminal() {
        println!("Welcome to propbook. Type 'help' for commands.");
        loop {
            let line: String = dialoguer::Input::new()
                .with_prompt("propbook")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }
            if handle_shell_line(context, &line, color) {
                return Ok(());
            }
        }
    }

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        if handle_shell_line(context, &line, color) {
            break;
        }
    }
    Ok(())
}

/// Print the outcome of one line. Returns true when the session should end.
fn handle_shell_line(context: &RunContext, line: &str, color: bool) -> bool {
    match context.parse_line(line) {
        Ok(command) => {
            match context.execute(&command) {
                Ok(output) => println!("{}", output),
                Err(e) => println!("{}", map_error(&e, color)),
            }
            command == Command::Exit
        }
        Err(e) => {
            println!("{}", map_error(&e, color));
            false
        }
    }
}

/// Build logging configuration from CLI args over the loaded config.
/// Precedence: --quiet, then explicit flags, then --verbose, then config.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.verbose {
        config.enabled = true;
        config.level = "debug".to_string();
        // Keep verbose logs visible on the terminal; an explicit --log-output still wins below.
        if config.output == "file" {
            config.output = "file+stderr".to_string();
        }
    }
    let explicit = cli.log_level.is_some()
        || cli.log_format.is_some()
        || cli.log_output.is_some()
        || cli.log_file.is_some();
    if explicit {
        config.enabled = true;
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    let output_uses_file = config.output == "file" || config.output == "file+stderr";
    if output_uses_file {
        if let Ok(path) = resolve_log_file_path(cli.log_file.clone(), config.file.clone()) {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    if cli.quiet {
        config.enabled = false;
    }
    config
}
