use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use i2a::cli::{version_text, Args, USAGE};
use i2a::config::Config;
use i2a::convert::{convert_file, info_footer};
use i2a::{terminal, I2aError};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the art
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return parse_error(e),
    };

    if args.print_version {
        return emit(&version_text(), ExitCode::SUCCESS);
    }
    if args.image.is_none() {
        return emit(USAGE, ExitCode::from(1));
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Help is a success; every other parse failure prints usage and exits 1.
fn parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            emit(&e.to_string(), ExitCode::SUCCESS)
        }
        _ => {
            log::debug!("Argument error: {:?}", e.kind());
            let mut text = e.to_string();
            // clap only appends its usage block for some error kinds
            if !text.contains("Usage:") {
                text.push_str(USAGE);
            }
            emit(&text, ExitCode::from(1))
        }
    }
}

/// Write `text` to stdout and exit with `code`, or 1 if stdout is gone.
fn emit(text: &str, code: ExitCode) -> ExitCode {
    let mut out = io::stdout().lock();
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => code,
        Err(e) => {
            log::debug!("Couldn't write to stdout: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> i2a::Result<()> {
    let config = Config::load(args.config.as_deref())?;

    let term = if args.terminal {
        let size = terminal::size().map_err(I2aError::TerminalSize)?;
        log::debug!("Terminal size: {}x{}", size.cols, size.rows);
        Some(size)
    } else {
        None
    };

    let conversion = args.to_conversion(&config, term)?;
    let matrix = convert_file(&conversion)?;

    matrix.print()?;
    if args.info {
        let mut out = io::stdout().lock();
        out.write_all(info_footer(&matrix).as_bytes())?;
        out.flush()?;
    }
    Ok(())
}
