use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Text,
}

mod commands;
mod output;
mod tty;

use commands::rename;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "nestch")]
#[command(version = VERSION)]
#[command(about = "CLI to rename NestJS resource names")]
#[command(after_help = "Examples:\n  $ nestch rename users members\n  $ nestch ch users members --dry-run")]
struct Cli {
    /// Print a JSON envelope instead of the text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename a NestJS resource and update all references
    #[command(visible_alias = "rn")]
    Rename(rename::RenameArgs),
    /// Alias for 'rename' command
    #[command(visible_alias = "ch")]
    Change(rename::RenameArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let mode = if cli.json {
        ResponseMode::Json
    } else {
        ResponseMode::Text
    };

    let exit_code = match mode {
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(cli.command);
            match output::print_json_result(json_result) {
                Ok(()) => exit_code,
                Err(err) => {
                    eprintln!("{}", err);
                    1
                }
            }
        }
        ResponseMode::Text => output::print_text_result(commands::run_text(cli.command)),
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
