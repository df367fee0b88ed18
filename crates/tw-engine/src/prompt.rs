//! Injected confirm/choose collaborator.
//!
//! Interactive prompting is an external capability: the engine only sees
//! this trait, and batch/scripted callers plug in [`NonInteractive`].

use tw_core::{Descriptor, Version};

/// Confirm-or-choose collaborator used before destructive batches and for
/// single-migration selection.
pub trait Interaction {
    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str) -> bool;

    /// Pick one of the offered migrations, or `None` to cancel.
    ///
    /// The returned version must be one of `options`; the orchestrator
    /// rejects anything else.
    fn choose(&self, prompt: &str, options: &[Descriptor]) -> Option<Version>;
}

/// Non-interactive default: approves every confirmation and picks the
/// first offered option.
pub struct NonInteractive;

impl Interaction for NonInteractive {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }

    fn choose(&self, _prompt: &str, options: &[Descriptor]) -> Option<Version> {
        options.first().map(|d| d.version.clone())
    }
}
