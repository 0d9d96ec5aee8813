use clap::Parser;

mod commands;
mod output;
mod tty;

use commands::replace::ReplaceArgs;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Diff,
}

#[derive(Parser)]
#[command(name = "ruplace")]
#[command(version = VERSION)]
#[command(about = "Find and replace text line by line, printing a diff of every change")]
struct Cli {
    #[command(flatten)]
    replace: ReplaceArgs,

    /// Print a JSON envelope with every replacement instead of a diff
    #[arg(long)]
    json: bool,
}

fn response_mode(cli: &Cli) -> ResponseMode {
    if cli.json {
        ResponseMode::Json
    } else {
        ResponseMode::Diff
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = match response_mode(&cli) {
        ResponseMode::Diff => match commands::run_diff(&cli.replace) {
            Ok((content, exit_code)) => match output::print_raw(&content) {
                Ok(()) => exit_code,
                Err(err) => print_error(err),
            },
            Err(err) => print_error(err),
        },
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(&cli.replace);
            match output::print_result(json_result) {
                Ok(()) => exit_code,
                Err(_) => 1,
            }
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn print_error(err: ruplace::Error) -> i32 {
    let exit_code = output::exit_code_for_error(err.code);
    let _ = output::print_result::<serde_json::Value>(Err(err));
    exit_code
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
