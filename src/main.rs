use clap::Parser;
use gstatus::commands::execute_status;
use gstatus::core::{error::Result, input::InputMode, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gstatus")]
#[command(about = "Summarize git status as a single line for shell prompts")]
#[command(version)]
struct Cli {
    /// Enable debug logging and report failures on stderr
    #[arg(long)]
    debug: bool,

    /// Where status lines come from
    #[arg(long, value_enum, default_value_t = InputMode::Auto)]
    input: InputMode,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep stderr quiet for prompts unless asked otherwise
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "error");
    }
    env_logger::init();

    // A failed summary prints nothing so the hosting prompt still renders
    if let Err(e) = execute_status(cli.input, cli.config.as_deref()) {
        log::debug!("No status line produced: {e}");
        if cli.debug {
            print_error(&e.to_string());
        }
    }

    Ok(())
}
