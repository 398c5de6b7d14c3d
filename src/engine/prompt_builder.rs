use crate::model::fields::StructuredFields;
use crate::model::genre::WritingGenre;

pub const DEFAULT_LANGUAGE: &str = "English";

/// Builds the prompts sent to the text-generation API.
/// Only formats text: no validation, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Genre prompt for the given fields, written in `language`.
    pub fn build(genre: WritingGenre, fields: &StructuredFields, language: &str) -> String {
        let mut prompt = String::new();

        push_genre_request(&mut prompt, genre);
        push_info_block(&mut prompt, fields);
        push_style_instruction(&mut prompt, genre, language);

        prompt
    }

    /// Same as [`PromptBuilder::build`], keyed by a free-form genre label.
    /// An unrecognized label yields an empty prompt, which callers must
    /// treat as "nothing to send".
    pub fn build_for_label(label: &str, fields: &StructuredFields, language: &str) -> String {
        match label.parse::<WritingGenre>() {
            Ok(genre) => Self::build(genre, fields, language),
            Err(err) => {
                tracing::warn!(%err, "no prompt template for genre label");
                String::new()
            }
        }
    }

    /// Asks for a full rewrite of `previous` taking `feedback` into account.
    pub fn build_revision(previous: &str, feedback: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str("Rewrite the following piece of writing, applying the requested changes.\n\n");
        push_section(&mut prompt, "Original text", previous);
        push_section(&mut prompt, "Requested changes", feedback);
        prompt.push_str(
            "Apply the requested changes above and write the entire piece again from start to finish. \
Return only the rewritten text.",
        );

        prompt
    }
}

fn push_genre_request(prompt: &mut String, genre: WritingGenre) {
    let noun = match genre {
        WritingGenre::Poem => "a poem",
        WritingGenre::Essay => "an essay",
        WritingGenre::ShortStory => "a short story",
        WritingGenre::Report => "a report",
    };

    prompt.push_str(&format!("Write {noun} based on the following information:\n"));
}

fn push_info_block(prompt: &mut String, fields: &StructuredFields) {
    prompt.push_str(&fields.to_info_block());
    prompt.push('\n');
}

fn push_style_instruction(prompt: &mut String, genre: WritingGenre, language: &str) {
    let instruction = match genre {
        WritingGenre::Poem => {
            format!("Write a lyrical, emotionally evocative poem in {language}.")
        }
        WritingGenre::Essay => format!(
            "Write it in {language} as an essay in the first person, reflecting on personal experience and thoughts."
        ),
        WritingGenre::ShortStory => format!(
            "Write it in {language} as a short story that develops characters, a setting and a sequence of events."
        ),
        WritingGenre::Report => format!(
            "Write it in {language} as a formal report with an objective tone, stating the facts and an analysis of them."
        ),
    };

    prompt.push_str(&instruction);
}

fn push_section(prompt: &mut String, label: &str, body: &str) {
    prompt.push_str(label);
    prompt.push_str(":\n");
    prompt.push_str(body);
    prompt.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::Field;

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
    fn every_genre_includes_every_value() {
        let fields = library_fields();

        for genre in WritingGenre::ALL {
            let prompt = PromptBuilder::build(genre, &fields, "English");
            assert!(!prompt.is_empty());
            for (_, value) in fields.iter() {
                assert!(prompt.contains(value), "{genre}: missing {value:?}");
            }
        }
    }

    #[test]
    fn genres_get_distinct_templates() {
        let fields = library_fields();
        let prompts: Vec<String> = WritingGenre::ALL
            .iter()
            .map(|g| PromptBuilder::build(*g, &fields, "English"))
            .collect();

        for (i, a) in prompts.iter().enumerate() {
            for b in prompts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn report_prompt_asks_for_a_report() {
        let prompt = PromptBuilder::build(WritingGenre::Report, &library_fields(), "English");
        assert!(prompt.starts_with("Write a report based on the following information:"));
        assert!(prompt.contains("formal report"));
        assert!(prompt.contains("objective"));
    }

    #[test]
    fn language_is_injected() {
        let prompt = PromptBuilder::build(WritingGenre::Poem, &library_fields(), "Korean");
        assert!(prompt.contains("poem in Korean"));
    }

    #[test]
    fn unknown_label_gives_empty_prompt() {
        assert_eq!(
            PromptBuilder::build_for_label("haiku", &library_fields(), "English"),
            ""
        );
    }

    #[test]
    fn known_label_matches_typed_build() {
        let fields = library_fields();
        assert_eq!(
            PromptBuilder::build_for_label("short story", &fields, "English"),
            PromptBuilder::build(WritingGenre::ShortStory, &fields, "English"),
        );
    }

    #[test]
    fn revision_prompt_has_labeled_sections() {
        let previous = "Roses are red,\nviolets are blue.";
        let feedback = "Make it rhyme less.";
        let prompt = PromptBuilder::build_revision(previous, feedback);

        let original_at = prompt.find("Original text:\n").unwrap();
        let changes_at = prompt.find("Requested changes:\n").unwrap();
        assert!(original_at < changes_at);

        assert!(prompt[original_at..changes_at].contains(previous));
        assert!(prompt[changes_at..].contains(feedback));
        assert!(prompt.contains("entire piece"));
    }
}
