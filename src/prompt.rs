use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::output;

/// One line of input, trimmed. EOF (piped stdin running dry) reads as an
/// empty answer so every prompt degrades to its default.
pub fn ask(question: &str) -> Result<String> {
    print!("{} {} ", output::question_mark(), question);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt with a dim default hint; an empty answer selects the default.
pub fn ask_with_default(question: &str, default: &str) -> Result<String> {
    let answer = ask(&format!(
        "{} {}",
        question,
        output::dim(&format!("({})", default))
    ))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Default-yes confirmation: only an explicit `n` declines.
pub fn confirm(question: &str) -> Result<bool> {
    let answer = ask(&format!("{} (Y/n)", question))?;
    Ok(!answer.eq_ignore_ascii_case("n"))
}
