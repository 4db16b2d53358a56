mod cli;
mod cmd;
mod completions;
mod decode;
mod exit_codes;
mod format;
mod parse;
mod progress;
mod run;
mod signals;

use clap::Parser;
use wstatus::wait_status;

fn main() {
    let cli = cli::Cli::parse();
    let code = match cli.command {
        cli::Commands::Decode {
            format,
            show_raw,
            statuses,
        } => decode::run_decode(format, show_raw, &statuses),
        cli::Commands::Run { quiet, command } => run::run_run(&command, quiet),
        cli::Commands::Completions { shell } => completions::run_completions(shell),
    };
    std::process::exit(code);
}
