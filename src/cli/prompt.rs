//! Interactive confirmation

use std::io::{self, BufRead, Write};

/// Ask a yes/no question; anything but `y`/`yes` counts as no
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    write!(output, "{} [y/N]: ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Ask on the terminal
pub fn confirm_stdin(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm(&mut stdin.lock(), &mut io::stdout(), question)
}
