use std::fmt;
use std::io::{self, BufRead, Write};

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: nearest and k-nearest neighbour classification.
    Neighbours,
    /// 2: multilayer perceptron training and evaluation.
    Network,
    /// 3: quit.
    Exit,
}

/// Rejected menu input; the user is simply asked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::NotANumber(input) => write!(f, "Invalid input '{}'. Please enter a number.", input),
            MenuError::OutOfRange(choice) => write!(f, "Choice {} must be between 1 and 3. Please try again.", choice),
        }
    }
}

pub fn parse_choice(line: &str) -> Result<MenuChoice, MenuError> {
    let trimmed = line.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;
    match number {
        1 => Ok(MenuChoice::Neighbours),
        2 => Ok(MenuChoice::Network),
        3 => Ok(MenuChoice::Exit),
        other => Err(MenuError::OutOfRange(other)),
    }
}

/// Shows the menu until a valid choice is entered.
///
/// Returns `None` once `input` is exhausted.
pub fn prompt_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<MenuChoice>> {
    loop {
        display_menu(out)?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        match parse_choice(&line) {
            Ok(choice) => return Ok(Some(choice)),
            Err(e) => writeln!(out, "{}\n", e)?,
        }
    }
}

fn display_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Select an algorithm for digit recognition:")?;
    writeln!(out, "1. Nearest / K-Nearest Neighbour")?;
    writeln!(out, "2. Multilayer Perceptron")?;
    writeln!(out, "3. Exit")?;
    write!(out, "\nEnter your choice (number): ")?;
    out.flush()
}
