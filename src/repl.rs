//! Interactive line loop over the lexer and parser.
//!
//! Reads one line at a time, runs it through the front end, and prints
//! either the raw token stream or the reconstructed program. Pure I/O glue;
//! all the logic lives in `lexer` and `parser`.

use std::io::{BufRead, Write};

use crate::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::Parser,
};

const PROMPT: &str = ">> ";

/// What the loop prints for each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplMode {
    /// One token per output line, EOF excluded.
    Tokens,
    /// The reconstructed program string, or the recorded parser errors.
    Parse,
}

/// Runs the loop until the input runs out. Each line gets a fresh
/// lexer/parser pair.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    mode: ReplMode,
) -> std::io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match mode {
            ReplMode::Tokens => print_tokens(&mut output, &line)?,
            ReplMode::Parse => print_program(&mut output, &line)?,
        }
    }
}

fn print_tokens<W: Write>(output: &mut W, line: &str) -> std::io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            return Ok(());
        }
        writeln!(output, "{}", token)?;
    }
}

fn print_program<W: Write>(output: &mut W, line: &str) -> std::io::Result<()> {
    let mut parser = Parser::new(Lexer::new(line));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            writeln!(output, "parser error: {}", error)?;
        }
        return Ok(());
    }

    writeln!(output, "{}", program)
}
