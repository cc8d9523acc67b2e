//! Startup reporting
//!
//! Two lines are written to standard output before the framework boots: a
//! fixed banner and a report of the command-line arguments the process was
//! given. The framework re-reads the process arguments itself afterwards,
//! so nothing here filters or rewrites them.

use std::io::{self, Write};

/// Fixed banner printed as the first line of every run.
pub const BANNER: &str = "Launching the sample demo application...";

/// Fixed prefix of the argument report line.
pub const ARGS_PREFIX: &str = "  Command line args: ";

/// Concatenate `args` in order, each token followed by a single space.
///
/// The final token also gets a trailing space; an empty sequence yields an
/// empty string.
pub fn join_args<I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for arg in args {
        joined.push_str(arg.as_ref());
        joined.push(' ');
    }
    joined
}

/// Write the banner line and the argument report line to `out`.
pub fn report_to<W, I>(out: &mut W, args: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{ARGS_PREFIX}{}", join_args(args))?;
    Ok(())
}

/// Print the startup report for the current process to standard output.
pub fn print_report<I>(args: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    println!("{BANNER}");
    println!("{ARGS_PREFIX}{}", join_args(args));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn join_args_empty_yields_empty_string() {
        let args: [&str; 0] = [];
        assert_eq!(join_args(args), "");
    }

    #[test]
    fn join_args_appends_trailing_space_per_token() {
        assert_eq!(join_args(["--port", "8080"]), "--port 8080 ");
    }

    #[test]
    fn join_args_preserves_order_and_content() {
        assert_eq!(join_args(["b", "a", "", "a"]), "b a  a ");
    }

    #[test]
    fn report_lines_for_empty_args() {
        let mut out = Vec::new();
        let args: [&str; 0] = [];
        report_to(&mut out, args).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Launching the sample demo application...\n  Command line args: \n"
        );
    }

    #[test]
    fn report_banner_precedes_argument_line() {
        let mut out = Vec::new();
        report_to(&mut out, ["--port", "8080"]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(BANNER));
        assert_eq!(lines.next(), Some("  Command line args: --port 8080 "));
        assert_eq!(lines.next(), None);
    }
}
