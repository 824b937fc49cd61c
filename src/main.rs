// src/main.rs  --  morse-codec entry point
use anyhow::{Context, Result};
use clap::Parser;
use morse_codec::config::{self, AppConfig, Cli, Command};
use morse_codec::morse::{Codec, SymbolTable, Timing};
use std::io::{self, BufRead, Write};
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        return Ok(());
    }

    // ── Load config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cfg, cli.command, io::stdin().lock(), &mut out)
}

/// Execute `command` against `input` lines (used when no positional
/// arguments are given), writing results to `out`.
fn run(cfg: &AppConfig, command: Option<Command>, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let codec = cfg.codec()?;

    // no subcommand: act as a stdin → Morse filter
    match command.unwrap_or(Command::Encode { text: Vec::new() }) {
        Command::Encode { text } => {
            let timing = cfg.show_timing.then(|| cfg.timing());
            let mut total = Duration::ZERO;
            for line in input_lines(text, input)? {
                total += encode_line(&codec, &line, timing.as_ref(), &mut *out)?;
            }
            if timing.is_some() {
                writeln!(out, "# total {}", fmt_duration(total))?;
            }
        }
        Command::Decode { code } => {
            for line in input_lines(code, input)? {
                let text = codec
                    .decode(&line)
                    .with_context(|| format!("Decoding {line:?}"))?;
                writeln!(out, "{text}")?;
            }
        }
        Command::Table => {
            for (ch, code) in SymbolTable::standard().iter() {
                writeln!(out, "{ch}  {code}")?;
            }
        }
    }
    Ok(())
}

/// Encode one line; returns its airtime (zero when timing is off).
fn encode_line(codec: &Codec, line: &str, timing: Option<&Timing>, out: &mut impl Write) -> Result<Duration> {
    let encoded = codec
        .encode(line)
        .with_context(|| format!("Encoding {line:?}"))?;
    writeln!(out, "{encoded}")?;

    let Some(t) = timing else { return Ok(Duration::ZERO) };
    let airtime = t.airtime(&[codec.codes(line)?]);
    writeln!(out, "# {} at {} ms/dot", fmt_duration(airtime), t.dot.as_millis())?;
    Ok(airtime)
}

/// Positional arguments, or `input` lines when there are none. Line endings
/// (CRLF included) are stripped and blank lines skipped.
fn input_lines(args: Vec<String>, input: impl BufRead) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    log::debug!("[main] reading stdin");
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line.context("Reading stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

fn fmt_duration(d: Duration) -> String {
    format!("{:.2}s", d.as_secs_f64())
}
