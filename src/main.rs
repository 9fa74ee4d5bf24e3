//! JSON codec CLI.
//!
//! Thin wrapper over the library's `parse` and `serialize` entry points:
//! reads a whole document from a file or stdin, parses it, and either
//! reports validity or re-emits it. No codec logic lives here.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use json_codec::{parse, serialize, serialize_pretty};

#[derive(Parser)]
#[command(name = "json-codec")]
#[command(about = "Strict JSON validator and formatter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and report whether it is valid JSON
    Check {
        /// Input file; reads stdin when omitted
        path: Option<PathBuf>,
    },

    /// Parse a document and re-emit it in canonical form
    Fmt {
        /// Input file; reads stdin when omitted
        path: Option<PathBuf>,

        /// Indent the output instead of emitting the compact form
        #[arg(long)]
        pretty: bool,

        /// Spaces per nesting level when pretty-printing
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let (path, input) = match &cli.command {
        Commands::Check { path } | Commands::Fmt { path, .. } => match read_input(path.as_ref()) {
            Ok(input) => (path, input),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    log::debug!("read {} bytes", input.len());

    let value = match parse(&input) {
        Ok(value) => value,
        Err(e) => {
            match path {
                Some(path) => eprintln!("error: {}: {e}", path.display()),
                None => eprintln!("error: {e}"),
            }
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Check { .. } => {
            log::debug!("valid {} at root", value.type_name());
        }
        Commands::Fmt { pretty, indent, .. } => {
            if pretty {
                println!("{}", serialize_pretty(&value, indent));
            } else {
                println!("{}", serialize(&value));
            }
        }
    }

    ExitCode::SUCCESS
}
