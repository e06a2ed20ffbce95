//! I/O host abstraction for the menu.
//!
//! The menu core interacts only through [`MenuHost`], so different hosts
//! (terminal, scripted test host) can provide their own I/O.

use std::borrow::Cow;
use std::io::{self, Write};

use nu_ansi_term::Color;
use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline,
    Signal as ReedlineSignal,
};

/// Error type for host I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("I/O error: {0}")]
    Io(String),
}

/// Host interface for menu I/O.
///
/// `read_line` returns `None` on end of input (Ctrl+D or an exhausted
/// script), which the menu treats as a quit request.
pub trait MenuHost {
    /// Prompt the user and read one line.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, HostError>;

    /// Write a normal output line.
    fn write_line(&mut self, text: &str) -> Result<(), HostError>;

    /// Write an error line.
    fn write_error(&mut self, text: &str) -> Result<(), HostError>;
}

/// Terminal host using Reedline for line input.
pub struct TerminalHost {
    line_editor: Reedline,
}

impl TerminalHost {
    /// Create a new terminal host.
    pub fn new() -> Self {
        Self {
            line_editor: Reedline::create(),
        }
    }
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuHost for TerminalHost {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, HostError> {
        let prompt = MenuPrompt {
            text: prompt.to_string(),
        };
        match self.line_editor.read_line(&prompt) {
            Ok(ReedlineSignal::Success(line)) => Ok(Some(line)),
            // Ctrl+C cancels the current prompt, not the program.
            Ok(ReedlineSignal::CtrlC) => Ok(Some(String::new())),
            Ok(ReedlineSignal::CtrlD) => Ok(None),
            Err(e) => Err(HostError::Io(format!("reedline error: {e}"))),
        }
    }

    fn write_line(&mut self, text: &str) -> Result<(), HostError> {
        println!("{text}");
        io::stdout()
            .flush()
            .map_err(|e| HostError::Io(e.to_string()))
    }

    fn write_error(&mut self, text: &str) -> Result<(), HostError> {
        println!("{} {}", Color::Red.bold().paint("Error:"), text);
        io::stdout()
            .flush()
            .map_err(|e| HostError::Io(e.to_string()))
    }
}

/// Prompt implementation for the terminal.
struct MenuPrompt {
    text: String,
}

impl Prompt for MenuPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(Color::Yellow.paint(&self.text).to_string())
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Owned(format!("{} ", Color::Green.bold().paint(">")))
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}
