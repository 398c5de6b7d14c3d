use crate::engine::llm_client::{GenerationRequest, TextGenerator};
use crate::engine::prompt_builder::{PromptBuilder, DEFAULT_LANGUAGE};
use crate::model::error::GenerationError;
use crate::model::fields::StructuredFields;
use crate::model::genre::WritingGenre;
use crate::model::result::{GenerationResult, ResultKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    AwaitingGeneration,
    Displaying,
    AwaitingRevision,
}

/// One user's generate/revise loop. Holds the latest text and nothing else
/// that outlives a call; the credential is borrowed per action.
pub struct GenerationSession<G> {
    generator: G,
    language: String,
    result: GenerationResult,
    phase: SessionPhase,
}

impl<G: TextGenerator> GenerationSession<G> {
    pub fn new(generator: G, language: impl Into<String>) -> Self {
        Self {
            generator,
            language: normalize_language(language.into()),
            result: GenerationResult::default(),
            phase: SessionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    /// Blank input falls back to the default language.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = normalize_language(language.into());
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Validates input, writes a genre prompt and replaces the result with
    /// the model's answer. A failed call keeps whatever text was there,
    /// which is nothing on a first attempt.
    pub fn generate(
        &mut self,
        credential: &str,
        genre: WritingGenre,
        fields: StructuredFields,
    ) -> Result<&str, GenerationError> {
        if credential.is_empty() {
            tracing::warn!("generate rejected: missing API key");
            return Err(GenerationError::MissingCredential);
        }

        let missing = fields.missing();
        if !missing.is_empty() {
            tracing::warn!(?missing, "generate rejected: incomplete fields");
            return Err(GenerationError::IncompleteFields { missing });
        }

        self.phase = SessionPhase::AwaitingGeneration;

        let prompt = PromptBuilder::build(genre, &fields, &self.language);
        tracing::info!(%genre, prompt_len = prompt.len(), "generating");

        match self.generator.generate(credential, &GenerationRequest::new(prompt)) {
            Ok(text) => {
                tracing::info!(result_len = text.len(), "generation finished");
                self.result.replace(text, ResultKind::Generated);
                self.phase = SessionPhase::Displaying;
                Ok(self.result.text())
            }
            Err(err) => {
                tracing::error!(%err, "generation failed");
                self.phase = if self.result.is_empty() {
                    SessionPhase::Idle
                } else {
                    SessionPhase::Displaying
                };
                Err(err)
            }
        }
    }

    /// Rewrites the current text with `feedback`. A failed call keeps the
    /// text that was there before.
    pub fn revise(&mut self, credential: &str, feedback: &str) -> Result<&str, GenerationError> {
        if self.result.is_empty() {
            return Err(GenerationError::NothingToRevise);
        }

        if credential.is_empty() {
            tracing::warn!("revise rejected: missing API key");
            return Err(GenerationError::MissingCredential);
        }

        if feedback.trim().is_empty() {
            tracing::warn!("revise rejected: missing feedback");
            return Err(GenerationError::MissingFeedback);
        }

        self.phase = SessionPhase::AwaitingRevision;

        let prompt = PromptBuilder::build_revision(self.result.text(), feedback);
        tracing::info!(prompt_len = prompt.len(), "revising");

        let outcome = self.generator.generate(credential, &GenerationRequest::new(prompt));
        self.phase = SessionPhase::Displaying;

        match outcome {
            Ok(text) => {
                tracing::info!(result_len = text.len(), "revision finished");
                self.result.replace(text, ResultKind::Revised);
                Ok(self.result.text())
            }
            Err(err) => {
                tracing::error!(%err, "revision failed");
                Err(err)
            }
        }
    }
}

fn normalize_language(language: String) -> String {
    let trimmed = language.trim();
    if trimmed.is_empty() {
        DEFAULT_LANGUAGE.to_string()
    } else {
        trimmed.to_string()
    }
}
