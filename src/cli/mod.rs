//! Interactive front end: line editing, completion, and colored output.

use colored::*;

use crate::error::Error;
use crate::sexp::Sexp;

pub mod cli_helper;
pub mod cli_stream;

pub use self::cli_helper::CliHelper;
pub use self::cli_stream::CliStream;


/// Renders sexp for the terminal, lists in readable form with parens colored
/// by nesting depth.
pub fn colored_sexp(sexp: &Sexp) -> String {
    fn paren_color(depth: usize) -> (u8, u8, u8) {
        match depth % 6 {
            0 => (0, 255, 204),
            1 => (204, 51, 0),
            2 => (153, 255, 102),
            3 => (153, 102, 255),
            4 => (255, 255, 102),
            _ => (255, 179, 179),
        }
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = sexp.write_list(
        &mut out,
        0,
        &mut |writer, leaf, _depth| {
            use std::fmt::Write;
            write!(writer, "{}", leaf)
        },
        &mut |writer, paren, depth| {
            use std::fmt::Write;
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        },
    );
    out
}

pub fn print_result(result: &Result<Sexp, Error>) {
    match result {
        Ok(val) => println!("-> {}", colored_sexp(val)),
        Err(err) => println!("{}", err.to_string().as_str().red()),
    }
}
