use std::io::{self, Write};

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Rendered reports carry their own trailing newline, if any
pub fn print_report(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{s}")?;
    out.flush()
}
