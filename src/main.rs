//! Read loop for conslisp.
//!
//! Batch mode (default) evaluates each line of FILE, or stdin, stopping at
//! the first error:   `conslisp prog.lisp`.
//! REPL mode echoes results (except print's) and keeps going after errors:
//!                    `RUST_LOG=info conslisp -r`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

use clap::{Arg, Command};
use log::{error, info, LevelFilter};

use conslisp::builtins;
use conslisp::cli::{self, CliStream};
use conslisp::error::Error;
use conslisp::interpreter::Interpreter;


fn main() {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("conslisp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minimal cons-cell Lisp interpreter")
        .arg(
            Arg::new("repl")
                .short('r')
                .long("repl")
                .help("Run an interactive read-eval-print loop"),
        )
        .arg(
            Arg::new("FILE")
                .help("Source file to evaluate line by line (default: stdin)")
                .index(1),
        )
        .get_matches();

    let mut interpreter = Interpreter::new();
    let status = if matches.is_present("repl") {
        repl(&mut interpreter);
        Ok(())
    } else {
        batch(&mut interpreter, matches.value_of("FILE"))
    };

    if let Err(err) = status {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn repl(interpreter: &mut Interpreter) {
    info!("Starting REPL");
    let mut stream = CliStream::new(interpreter.scope().visible_symbols());
    while let Some(unit) = stream.next() {
        let status = interpreter.interpret_each(&unit, |form, result| {
            if !(result.is_nil() && builtins::returns_nothing(form)) {
                cli::print_result(&Ok(result.clone()));
            }
        });
        if let Err(err) = status {
            cli::print_result(&Err(err));
        }
        println!();
        stream.set_symbols(interpreter.scope().visible_symbols());
    }
}

fn batch(interpreter: &mut Interpreter, path: Option<&str>) -> Result<(), String> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => return Err(format!("Opening {} failed: {}", path, err)),
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (i, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => return Err(format!("Reading line {} failed: {}", i + 1, err)),
        };
        if let Err(err) = interpreter.interpret(&line) {
            log_failure(i + 1, &err);
            return Err(err.to_string());
        }
    }
    Ok(())
}

fn log_failure(line: usize, err: &Error) {
    error!("Line {}: {:?}", line, err);
}
