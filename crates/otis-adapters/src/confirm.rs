//! Non-interactive confirmers.

use std::sync::{Arc, Mutex};

use otis_core::{application::ports::Confirmer, error::OtisResult};

/// Answers every prompt with the same fixed reply and keeps the prompts it
/// was shown.
#[derive(Debug, Clone)]
pub struct StaticConfirmer {
    answer: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StaticConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::default(),
        }
    }

    pub fn yes() -> Self {
        Self::new(true)
    }

    pub fn no() -> Self {
        Self::new(false)
    }

    /// Prompts shown so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

impl Confirmer for StaticConfirmer {
    fn confirm(&self, prompt: &str) -> OtisResult<bool> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.answer)
    }
}
