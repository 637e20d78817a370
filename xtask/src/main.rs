use std::process::{Command, ExitCode};

const GRAMMAR: &str = "grammar/lox.ast";
const OUTPUT: &str = "src/ast.rs";
const DERIVES: &str = "Debug,Clone,PartialEq,Eq,Hash";

fn main() -> ExitCode {
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    match args.first().map(String::as_str) {
        Some("codegen") => astgen(&[]),
        Some("check") => astgen(&["--check"]),
        _ => help(),
    }
}

/// Run astgen over the Lox grammar, with `extra` flags in front of the paths.
fn astgen(extra: &[&str]) -> ExitCode {
    let status = Command::new(env!("CARGO"))
        .args(["run", "--quiet", "-p", "astgen", "--"])
        .args(extra)
        .args(["--derive", DERIVES, GRAMMAR, OUTPUT])
        .status();

    match status {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("failed to run cargo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn help() -> ExitCode {
    eprint!(
        "
usage: cargo x <command>

commands:
    codegen    generate src/ast.rs from grammar/lox.ast
    check      fail if src/ast.rs is out of date
"
    );
    ExitCode::FAILURE
}
