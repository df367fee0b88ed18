//! Stdin-backed confirm/choose prompts.

use std::io::Write;
use tw_core::{Descriptor, Version};
use tw_engine::Interaction;

/// Interactive prompts on stdin/stdout.
pub(crate) struct StdinPrompt;

impl StdinPrompt {
    fn read_line() -> Option<String> {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).ok()?;
        Some(line.trim().to_string())
    }
}

impl Interaction for StdinPrompt {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = std::io::stdout().flush();
        matches!(
            Self::read_line().as_deref(),
            Some("y") | Some("Y") | Some("yes")
        )
    }

    fn choose(&self, prompt: &str, options: &[Descriptor]) -> Option<Version> {
        println!("{prompt}:");
        for (i, descriptor) in options.iter().enumerate() {
            println!(
                "  {}) {}_{}",
                i + 1,
                descriptor.version,
                descriptor.description
            );
        }
        print!("Enter a number (blank to cancel): ");
        let _ = std::io::stdout().flush();

        let line = Self::read_line()?;
        if line.is_empty() {
            return None;
        }
        let index: usize = line.parse().ok()?;
        options
            .get(index.checked_sub(1)?)
            .map(|d| d.version.clone())
    }
}
