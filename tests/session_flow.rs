use std::cell::{Cell, RefCell};

use w5h1_writer::engine::llm_client::{GenerationRequest, TextGenerator};
use w5h1_writer::engine::prompt_builder::PromptBuilder;
use w5h1_writer::engine::session::{GenerationSession, SessionPhase};
use w5h1_writer::model::error::GenerationError;
use w5h1_writer::model::fields::{Field, StructuredFields};
use w5h1_writer::model::genre::WritingGenre;

/// Always answers with the same text and records what it was asked.
struct StubApi {
    reply: Result<String, GenerationError>,
    calls: Cell<usize>,
    last: RefCell<Option<(String, GenerationRequest)>>,
}

impl StubApi {
    fn ok(text: &str) -> Self {
        Self::with(Ok(text.into()))
    }

    fn failing(msg: &str) -> Self {
        Self::with(Err(GenerationError::RemoteCallFailure(msg.into())))
    }

    fn with(reply: Result<String, GenerationError>) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            last: RefCell::new(None),
        }
    }
}

impl TextGenerator for StubApi {
    fn generate(
        &self,
        credential: &str,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some((credential.to_string(), request.clone()));
        self.reply.clone()
    }
}

fn library_fields() -> StructuredFields {
    StructuredFields::default()
        .with(Field::Who, "a student")
        .with(Field::When, "morning")
        .with(Field::Where, "a library")
        .with(Field::What, "reading a book")
        .with(Field::How, "quietly")
        .with(Field::Why, "to learn")
        .with(Field::Companion, "alone")
}

#[test]
fn report_scenario_end_to_end() {
    let fields = library_fields();
    let prompt = PromptBuilder::build(WritingGenre::Report, &fields, "English");

    assert!(prompt.contains("report"));
    for value in [
        "a student",
        "morning",
        "a library",
        "reading a book",
        "quietly",
        "to learn",
        "alone",
    ] {
        assert!(prompt.contains(value), "missing {value:?}");
    }

    let mut session = GenerationSession::new(StubApi::ok("OK"), "English");
    session
        .generate("secret", WritingGenre::Report, fields)
        .unwrap();

    assert_eq!(session.result().text(), "OK");

    let last = session.generator().last.borrow();
    let (credential, request) = last.as_ref().unwrap();
    assert_eq!(credential, "secret");
    assert_eq!(request.prompt, prompt);
    assert_eq!(request.model, "gemini-1.0-pro");
    assert_eq!(request.temperature, 0.7);
}

#[test]
fn empty_key_rejects_regardless_of_fields() {
    for fields in [StructuredFields::default(), library_fields()] {
        let mut session = GenerationSession::new(StubApi::ok("never"), "English");

        let err = session
            .generate("", WritingGenre::Poem, fields)
            .unwrap_err();

        assert_eq!(err, GenerationError::MissingCredential);
        assert!(session.result().is_empty());
        assert_eq!(session.generator().calls.get(), 0);
    }
}

#[test]
fn each_empty_field_blocks_generation() {
    for field in Field::ALL {
        let mut session = GenerationSession::new(StubApi::ok("never"), "English");
        let fields = library_fields().with(field, "");

        let err = session
            .generate("secret", WritingGenre::Essay, fields)
            .unwrap_err();

        assert_eq!(err, GenerationError::IncompleteFields { missing: vec![field] });
        assert_eq!(session.generator().calls.get(), 0);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }
}

#[test]
fn first_failure_leaves_no_result() {
    let mut session = GenerationSession::new(StubApi::failing("API key not valid."), "English");

    let err = session
        .generate("bad", WritingGenre::ShortStory, library_fields())
        .unwrap_err();

    assert_eq!(err.to_string(), "API key not valid.");
    assert!(session.result().is_empty());
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn unknown_genre_label_builds_nothing() {
    assert!(PromptBuilder::build_for_label("sonnet", &library_fields(), "English").is_empty());
    assert!(matches!(
        "sonnet".parse::<WritingGenre>(),
        Err(GenerationError::UnknownGenre(_))
    ));
}
