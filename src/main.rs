//! sortchain - Binary Entry Point
//!
//! Starts the interactive shell over a single sorted sequence. The element
//! kind is chosen by the first argument (`int` or `string`, default `int`).

use std::env;
use std::process;

use sortchain::{shell, SequenceService};

fn main() {
    env_logger::init();

    let selector = env::args().nth(1).unwrap_or_else(|| "int".to_string());
    let service = match SequenceService::from_selector(&selector) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("sortchain: {err}");
            process::exit(1);
        }
    };

    println!("===========================================");
    println!("  sortchain - interactive sorted sequence");
    println!("===========================================");
    println!();
    println!("element kind: {}", service.kind());
    println!("type `help` for the command list");
    println!();

    if let Err(err) = shell::run(service) {
        eprintln!("sortchain: shell error: {err}");
        process::exit(1);
    }
}
