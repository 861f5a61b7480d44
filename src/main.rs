//! cchooks - inspect Claude Code hook events.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cchooks::config::{ConfigLoader, ErrorPolicy, HookConfig};
use cchooks::display::{context_json, write_event_summary};
use cchooks::classify;
use cchooks::exit::Exit;
use cchooks::handlers::{handle_context_error, handle_unexpected_error};
use cchooks::input::read_raw_event_from_stdin;
use cchooks::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "cchooks",
    about = "Inspect Claude Code hook events",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of the default search paths.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one hook event from stdin and describe it on stderr.
    Inspect {
        /// Print the classified event as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<HookConfig, Exit> {
    let loader = path.map_or_else(ConfigLoader::new, ConfigLoader::with_path);
    loader
        .load()
        .map_err(|e| handle_unexpected_error(&e, &mut io::stderr(), ErrorPolicy::default()))
}

fn inspect(json: bool, config: &HookConfig) -> Exit {
    let mut stderr = io::stderr().lock();
    let ctx = match read_raw_event_from_stdin().and_then(classify) {
        Ok(ctx) => ctx,
        Err(e) => return handle_context_error(&e, &mut stderr, config.errors),
    };

    let written = if json {
        serde_json::to_writer_pretty(&mut stderr, &context_json(&ctx))
            .map_err(io::Error::from)
            .and_then(|()| writeln!(stderr))
    } else {
        let colored = stderr.is_terminal();
        write_event_summary(&mut stderr, &ctx, colored)
    };

    match written {
        Ok(()) => Exit::SUCCESS,
        Err(e) => handle_unexpected_error(&e, &mut stderr, config.errors),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = match load_config(cli.config) {
        Ok(config) => config,
        Err(exit) => return exit.into(),
    };
    config.logging.level = config.logging.level.raised(cli.verbose);
    init_tracing(&config.logging);

    let exit = match cli.command {
        Commands::Inspect { json } => inspect(json, &config),
    };
    exit.into()
}
