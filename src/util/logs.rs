use std::{
    fmt::Display,
    io::{self, Write},
};

use colored::Colorize;

/// Section header, separated from the previous output by a blank line
pub fn info(message: impl Display) {
    println!();
    println!("{}", message.to_string().blue().bold());
}

pub fn details(message: impl Display) {
    println!("  {message}");
}

pub fn done(message: impl Display) {
    println!("  {}", message.to_string().green().bold());
}

pub fn warn(message: impl Display) {
    println!("{}", message.to_string().yellow().bold());
}

/// Failures go to stdout with the rest of the step output.
pub fn fail(message: impl Display) {
    let _ = write_fail(&mut io::stdout().lock(), message);
}

fn write_fail(out: &mut impl Write, message: impl Display) -> io::Result<()> {
    writeln!(out, "{}", message.to_string().red().bold())
}
