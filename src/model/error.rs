use thiserror::Error;

use crate::model::fields::Field;

/// Everything that can stop a generate or revise action.
/// None of these end the session; the user fixes the input and tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Please enter your API key.")]
    MissingCredential,

    #[error("Please fill in every field (missing: {}).", join_labels(.missing))]
    IncompleteFields { missing: Vec<Field> },

    #[error("Please describe the changes you want.")]
    MissingFeedback,

    #[error("There is no text to revise yet.")]
    NothingToRevise,

    #[error("Unknown writing genre: {0:?}")]
    UnknownGenre(String),

    /// Message from the remote service, untouched.
    #[error("{0}")]
    RemoteCallFailure(String),
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_message_is_passed_through() {
        let err = GenerationError::RemoteCallFailure("API key not valid.".into());
        assert_eq!(err.to_string(), "API key not valid.");
    }

    #[test]
    fn incomplete_fields_names_them() {
        let err = GenerationError::IncompleteFields {
            missing: vec![Field::When, Field::Companion],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in every field (missing: When, With whom)."
        );
    }
}
