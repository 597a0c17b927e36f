use std::{env, io};

use prattle::repl::{self, ReplMode};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mode = match args.get(1).map(String::as_str) {
        Some("--tokens") => ReplMode::Tokens,
        Some(flag) => panic!("Unknown flag {flag:?} provided!"),
        None => ReplMode::Parse,
    };

    println!("Welcome to the prattle REPL!");
    println!("Type statements below, Ctrl-D to exit.");

    repl::start(io::stdin().lock(), io::stdout(), mode).expect("REPL I/O failed");
}
