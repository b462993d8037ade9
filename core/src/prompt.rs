//! User interaction capability
//!
//! Blocking confirmations and alerts are requested through [`Prompter`] so
//! the core never talks to a terminal or a browser directly.

/// Blocking dialogs offered by the presentation layer
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask a yes/no question; `true` means confirmed
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Show a message the user must acknowledge
    fn notify(&mut self, message: &str);
}

/// Prompter that answers every confirmation the same way and records alerts
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedPrompter {
    /// Answer given to every confirmation
    pub(crate) answer: bool,

    /// Prompts seen so far
    pub(crate) prompts: Vec<String>,

    /// Alerts shown so far
    pub(crate) notices: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    /// Prompter that confirms everything
    pub(crate) fn accepting() -> Self {
        ScriptedPrompter { answer: true, ..Default::default() }
    }

    /// Prompter that declines everything
    pub(crate) fn declining() -> Self {
        ScriptedPrompter { answer: false, ..Default::default() }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
