//! Terminal confirmation prompt.

use std::io::{self, BufRead, Write};

use otis_core::application::{ApplicationError, Confirmer};
use otis_core::error::OtisResult;

/// Asks on stderr and reads the answer from stdin.
///
/// On a terminal (with the `interactive` feature) this is a dialoguer
/// prompt. Otherwise one line is read from stdin, so scripts can pipe an
/// answer in; end of input counts as "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleConfirmer;

impl Confirmer for ConsoleConfirmer {
    fn confirm(&self, prompt: &str) -> OtisResult<bool> {
        if let Some(answer) = ask_on_terminal(prompt) {
            return answer;
        }

        let mut stderr = io::stderr().lock();
        write!(stderr, "{prompt} [y/N] ")
            .and_then(|()| stderr.flush())
            .map_err(prompt_failed)?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(prompt_failed)?;
        Ok(is_affirmative(&answer))
    }
}

#[cfg(feature = "interactive")]
fn ask_on_terminal(prompt: &str) -> Option<OtisResult<bool>> {
    use std::io::IsTerminal;

    if !(io::stdin().is_terminal() && io::stderr().is_terminal()) {
        return None;
    }
    let answer: OtisResult<bool> = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact_on(&console::Term::stderr())
        .map_err(|e| {
            ApplicationError::PromptFailed {
                reason: e.to_string(),
            }
            .into()
        });
    Some(answer)
}

#[cfg(not(feature = "interactive"))]
fn ask_on_terminal(_prompt: &str) -> Option<OtisResult<bool>> {
    None
}

fn prompt_failed(e: io::Error) -> otis_core::error::OtisError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_proceeds() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("  YES "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n\n"));
        assert!(!is_affirmative("yeah"));
    }
}
