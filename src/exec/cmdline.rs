// src/exec/cmdline.rs

//! Command-line quoting and splitting.
//!
//! Child processes are described by a single command-line string, using
//! the common argv convention of the Microsoft C runtime:
//!
//! - arguments are separated by unquoted spaces or tabs
//! - `"` toggles a quoted region; `""` inside one is a literal quote
//! - backslashes are literal unless they precede a `"`: `2n` of them
//!   become `n` and the quote is a delimiter, `2n+1` become `n` followed
//!   by a literal `"`
//!
//! [`quote_arg`] produces text that [`split_command_line`] turns back into
//! the original argument.

use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

static BACKSLASHES_BEFORE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\\*)""#).expect("valid quote regex"));

static TRAILING_BACKSLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\\+)$").expect("valid backslash regex"));

/// Quote one argument.
///
/// The argument is wrapped in double quotes; every run of backslashes in
/// front of a `"` is doubled and the quote escaped. A trailing run is
/// doubled too so the closing quote stays a delimiter.
pub fn quote_arg(arg: &str) -> String {
    let escaped = BACKSLASHES_BEFORE_QUOTE.replace_all(arg, r#"$1$1\""#);
    let escaped = TRAILING_BACKSLASHES.replace(&escaped, "$1$1");
    format!("\"{escaped}\"")
}

/// Quote every argument and join them with single spaces.
pub fn build_command_line<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|a| quote_arg(a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a command line into arguments.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(' ' | '\t')) {
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }

        let mut arg = String::new();
        let mut in_quotes = false;
        let mut backslashes = 0usize;

        while let Some(&c) = chars.peek() {
            match c {
                '\\' => {
                    backslashes += 1;
                    chars.next();
                }
                '"' => {
                    arg.extend(std::iter::repeat_n('\\', backslashes / 2));
                    chars.next();
                    if backslashes % 2 == 1 {
                        arg.push('"');
                    } else if in_quotes && chars.peek() == Some(&'"') {
                        chars.next();
                        arg.push('"');
                    } else {
                        in_quotes = !in_quotes;
                    }
                    backslashes = 0;
                }
                ' ' | '\t' if !in_quotes => break,
                _ => {
                    arg.extend(std::iter::repeat_n('\\', backslashes));
                    backslashes = 0;
                    arg.push(c);
                    chars.next();
                }
            }
        }
        arg.extend(std::iter::repeat_n('\\', backslashes));
        args.push(arg);
    }

    args
}

/// Build a [`Command`] running `program` with the arguments of `line`.
///
/// The first token of `line` is the program's own name as the child sees
/// it (`argv[0]`); on Unix it is passed through verbatim.
pub fn command_for(program: &Path, line: &str) -> Command {
    let argv = split_command_line(line);
    let mut cmd = Command::new(program);
    if let Some((first, rest)) = argv.split_first() {
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.arg0(first);
        }
        #[cfg(not(unix))]
        let _ = first;
        cmd.args(rest);
    }
    cmd
}
