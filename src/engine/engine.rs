use std::sync::mpsc::{Receiver, Sender};

use crate::engine::llm_client::TextGenerator;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::session::GenerationSession;
use crate::model::error::GenerationError;

/// Owns one [`GenerationSession`] and works through commands one at a time,
/// so at most one remote call is ever in flight.
pub struct Engine<G> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    session: GenerationSession<G>,
}

impl<G: TextGenerator> Engine<G> {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        session: GenerationSession<G>,
    ) -> Self {
        Self { rx, tx, session }
    }

    /// Runs until the command sender is dropped.
    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            let response = match cmd {
                EngineCommand::Generate {
                    credential,
                    genre,
                    fields,
                } => {
                    let outcome = self
                        .session
                        .generate(&credential, genre, fields)
                        .map(|_| ());
                    self.action_finished(outcome)
                }

                EngineCommand::Revise {
                    credential,
                    feedback,
                } => {
                    let outcome = self.session.revise(&credential, &feedback).map(|_| ());
                    self.action_finished(outcome)
                }

                EngineCommand::TestConnection { credential } => EngineResponse::ConnectionChecked(
                    self.session.generator().test_connection(&credential),
                ),

                EngineCommand::SetLanguage(language) => {
                    tracing::debug!(%language, "output language changed");
                    self.session.set_language(language);
                    continue;
                }
            };

            if self.tx.send(response).is_err() {
                tracing::debug!("ui went away, stopping engine");
                break;
            }
        }
    }

    fn action_finished(&self, outcome: Result<(), GenerationError>) -> EngineResponse {
        EngineResponse::ActionFinished {
            outcome,
            result: self.session.result().clone(),
        }
    }
}
