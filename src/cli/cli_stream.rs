use log::debug;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use crate::primitive::Symbol;
use crate::token::{Scanner, Token};


pub const PROMPT: &str = ">> ";

/// Line editor yielding one input unit per item.
///
/// A unit is normally one line, but keeps growing while it has unclosed
/// parens, so a form can be spread over several lines.
pub struct CliStream {
    editor: Editor<CliHelper>,
    curr_expr: String,
}

impl CliStream {
    pub fn new(symbols: Vec<Symbol>) -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new(symbols)));

        CliStream {
            editor,
            curr_expr: String::default(),
        }
    }

    /// Replaces the completion candidates, e.g. after a setq.
    pub fn set_symbols(&mut self, symbols: Vec<Symbol>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_symbols(symbols);
        }
    }
}

// Unclosed parens at the end of text. Scan errors count as complete so the
// interpreter gets to report them.
fn open_depth(text: &str) -> usize {
    let mut scanner = Scanner::new(text);
    loop {
        match scanner.next_token() {
            Ok((_, Token::EndOfFile)) => return scanner.depth(),
            Ok(_) => {}
            Err(_) => return 0,
        }
    }
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let depth = open_depth(&self.curr_expr);
            let line = if self.curr_expr.is_empty() {
                self.editor.readline(PROMPT)
            } else {
                self.editor
                    .readline(&format!("..{}", "  ".repeat(depth)))
            };

            match line {
                Ok(line) => {
                    if !self.curr_expr.is_empty() {
                        self.curr_expr.push('\n');
                    }
                    self.curr_expr += &line;
                    if open_depth(&self.curr_expr) > 0 {
                        continue;
                    }

                    let unit = std::mem::take(&mut self.curr_expr);
                    if unit.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(unit.as_str());
                    debug!("Read unit {:?}", unit);
                    return Some(unit);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Cancels a partially-entered form.
                    self.curr_expr.clear();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.curr_expr.clear();
                    continue;
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::open_depth;

    #[test]
    fn open_depth_counts_unclosed() {
        assert_eq!(open_depth(""), 0);
        assert_eq!(open_depth("(+ 1 2)"), 0);
        assert_eq!(open_depth("(list 1 (list"), 2);
        assert_eq!(open_depth("(print\n  \"a\""), 1);
    }

    #[test]
    fn open_depth_scan_error_is_complete() {
        assert_eq!(open_depth("(1 2))"), 0);
        assert_eq!(open_depth("(print \"abc"), 0);
    }
}
