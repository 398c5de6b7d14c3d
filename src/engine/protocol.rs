use crate::model::error::GenerationError;
use crate::model::fields::StructuredFields;
use crate::model::genre::WritingGenre;
use crate::model::result::GenerationResult;

pub enum EngineCommand {
    Generate {
        credential: String,
        genre: WritingGenre,
        fields: StructuredFields,
    },
    Revise {
        credential: String,
        feedback: String,
    },
    TestConnection {
        credential: String,
    },
    SetLanguage(String),
}

#[derive(Debug)]
pub enum EngineResponse {
    /// A generate or revise action finished. `result` is the session's text
    /// after the action, whatever the outcome.
    ActionFinished {
        outcome: Result<(), GenerationError>,
        result: GenerationResult,
    },

    ConnectionChecked(Result<String, GenerationError>),
}
