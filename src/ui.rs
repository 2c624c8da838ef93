//! Color-coded console reporting. This is the tool's only output surface.

const RED: &str = "\x1b[0;31m";
const MAGENTA: &str = "\x1b[0;35m";
const YELLOW: &str = "\x1b[0;33m";
const BLUE: &str = "\x1b[0;34m";
const GREEN: &str = "\x1b[0;32m";
const RESET: &str = "\x1b[0m";

fn colorize(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Per-project section header
pub fn header(message: &str) {
    println!("{}", colorize(message, MAGENTA));
}

pub fn info(message: &str) {
    println!("{}", colorize(message, BLUE));
}

pub fn note(message: &str) {
    println!("{}", colorize(message, GREEN));
}

pub fn warn(message: &str) {
    println!("{}", colorize(message, YELLOW));
}

pub fn error(message: &str) {
    eprintln!("{}", colorize(message, RED));
}
