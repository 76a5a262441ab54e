//! Questions on the terminal.

use std::io::{self, Write};

fn read_answer(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Ask a yes/no question. Anything but "y" is a no.
pub(crate) fn confirm(question: &str) -> io::Result<bool> {
    let answer = read_answer(&format!("{question} [y/N] "))?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Ask for a line of text. An empty answer is `None`.
pub(crate) fn input(prompt: &str) -> io::Result<Option<String>> {
    let answer = read_answer(&format!("{prompt}: "))?;
    Ok(if answer.is_empty() { None } else { Some(answer) })
}

/// Ask for one of `count` numbered entries. Returns a zero-based index, or
/// `None` when the answer is empty or out of range.
pub(crate) fn select(count: usize) -> io::Result<Option<usize>> {
    if count == 0 {
        return Ok(None);
    }
    let answer = read_answer(&format!("Select [1-{count}], empty to cancel: "))?;
    Ok(answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1))
}
