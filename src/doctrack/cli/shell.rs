//! The interactive session: reads command lines, splits them into words, and hands them
//! to the dispatcher. The record list lives as long as the session does.

use super::commands::{dispatch, AppContext, Flow};
use super::render::render_stats;
use super::setup::SessionLine;
use clap::Parser;
use colored::*;
use doctrack::error::Result;
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "doctrack> ";

/// Splits a command line into words, honouring single quotes, double quotes and
/// backslash escapes (outside single quotes).
pub fn split_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('"'), '"') => quote = None,
            (Some('\''), _) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("trailing backslash".to_string()),
            },
            (Some(_), _) => current.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, _) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Runs one line. Parse failures (including `help`) are printed and are not errors.
pub fn run_line(ctx: &mut AppContext, line: &str) -> Result<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let words = match split_line(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return Ok(Flow::Continue);
        }
    };

    match SessionLine::try_parse_from(words) {
        Ok(parsed) => {
            let flow = dispatch(ctx, parsed.command)?;
            if ctx.take_changed() {
                let stats = ctx.api.stats()?;
                if let Some(stats) = stats.stats {
                    print!("{}", render_stats(&stats));
                }
            }
            Ok(flow)
        }
        Err(e) => {
            // clap renders its own help and usage text
            let _ = e.print();
            Ok(Flow::Continue)
        }
    }
}

/// Runs the given lines in order, the same way the interactive loop would.
pub fn run_batch(ctx: &mut AppContext, lines: &[String]) -> Result<()> {
    for line in lines {
        if !run_reported(ctx, line) {
            break;
        }
    }
    Ok(())
}

/// Runs a line and reports a command failure on stderr. Returns false once the session
/// should end.
fn run_reported(ctx: &mut AppContext, line: &str) -> bool {
    match run_line(ctx, line) {
        Ok(flow) => flow == Flow::Continue,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            true
        }
    }
}

/// Reads lines from stdin until `quit` or end of input. Command failures are reported
/// and the session continues.
pub fn run_interactive(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!("{}", "Document expiry tracker".bold());
        if let Some(stats) = ctx.api.stats()?.stats {
            print!("{}", render_stats(&stats));
        }
        println!("{}", "Type `help` for commands, `quit` to leave.".dimmed());
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        if !run_reported(ctx, &line) {
            break;
        }
    }

    Ok(())
}
