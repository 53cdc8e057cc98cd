//! Rendering configuration for [`Erreur`] reports.
//!
//! `Display` uses the one-line header (`name: message`); `{:#}` uses
//! [`ErreurFormatConfig::pretty`]. Other layouts can be requested through
//! [`Erreur::format_with`].
//!
//! ```
//! use erreur::{Erreur, ErreurFormatConfig, Key};
//!
//! let attempt: Key<u8> = Key::new("Attempt");
//! let err = Erreur::create("timeout").with(attempt.provide(3));
//!
//! assert_eq!(err.format_with(&ErreurFormatConfig::compact()), "Erreur: timeout [Attempt: 3]");
//! ```
use crate::types::alloc_type::String;
use crate::types::erreur::{Erreur, MESSAGE_KEY, NAME_KEY, STACK_TRACE_KEY};
use crate::types::stack::DebugEntry;
use core::fmt::Write;

/// Configuration-based report formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErreurFormatConfig {
    /// Separator between context items on a single line.
    pub separator: String,
    /// Indentation of context items in multiline mode.
    pub indent: String,
    /// One item per line instead of a bracketed list.
    pub multiline: bool,
    /// List the annotations other than name, message and stack trace.
    pub show_context: bool,
    /// Append the stack trace when one is attached.
    pub show_stack_trace: bool,
}

impl Default for ErreurFormatConfig {
    fn default() -> Self {
        Self {
            separator: ", ".into(),
            indent: "  ".into(),
            multiline: false,
            show_context: false,
            show_stack_trace: false,
        }
    }
}

impl ErreurFormatConfig {
    /// Multiline report with context and stack trace.
    #[inline]
    pub fn pretty() -> Self {
        Self { multiline: true, show_context: true, show_stack_trace: true, ..Default::default() }
    }

    /// Single line with a bracketed context list.
    #[inline]
    pub fn compact() -> Self {
        Self { show_context: true, ..Default::default() }
    }

    /// Renders `erreur` according to this configuration.
    pub fn format(&self, erreur: &Erreur) -> String {
        let mut out = String::with_capacity(64);
        let _ = write!(out, "{}: {}", erreur.name(), erreur.message());

        if self.show_context {
            let items = erreur
                .stack()
                .iter()
                .filter(|entry| !entry.is(&NAME_KEY) && !entry.is(&MESSAGE_KEY) && !entry.is(&STACK_TRACE_KEY))
                .map(DebugEntry::from);

            if self.multiline {
                let mut items = items.peekable();
                if items.peek().is_some() {
                    out.push_str("\nContext:");
                }
                for item in items {
                    let _ = write!(out, "\n{}- {}", self.indent, item);
                }
            } else {
                let mut listed = false;
                for item in items {
                    out.push_str(if listed { self.separator.as_str() } else { " [" });
                    let _ = write!(out, "{}", item);
                    listed = true;
                }
                if listed {
                    out.push(']');
                }
            }
        }

        if self.show_stack_trace {
            if let Some(trace) = erreur.stack_trace() {
                out.push('\n');
                out.push_str(trace);
            }
        }

        out
    }
}
