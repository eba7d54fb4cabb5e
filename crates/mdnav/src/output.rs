//! Human-facing terminal output on stderr.
//!
//! stdout is reserved for command data such as `mdnav routes` JSON.

use std::fmt::Display;

use console::{Style, Term};

pub(crate) struct Output {
    term: Term,
    label: Style,
    failure: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().cyan().bold(),
            failure: Style::new().red(),
        }
    }

    /// Print `label: value` with the label highlighted.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        let _ = self
            .term
            .write_line(&format!("{} {value}", self.label.apply_to(format!("{label}:"))));
    }

    /// Print an error in red.
    pub(crate) fn error(&self, err: &impl Display) {
        let _ = self
            .term
            .write_line(&self.failure.apply_to(format!("Error: {err}")).to_string());
    }
}
