use std::env;
use std::process::ExitCode;

use chess_core::engine::{run_self_play, SelfPlayConfig};

fn main() -> ExitCode {
    env_logger::init();

    let config = match SelfPlayConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: chess_core [--seed <u64>] [--max-plies <usize>]");
            return ExitCode::from(2);
        }
    };

    match run_self_play(&config) {
        Ok(report) => {
            println!("plies: {}", report.plies);
            println!("fen: {}", report.final_fen);
            match report.outcome {
                Some(outcome) => println!("result: {outcome}"),
                None => println!("result: unfinished"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("self-play aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
