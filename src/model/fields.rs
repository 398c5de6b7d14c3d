use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven fixed questions a piece of writing is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Who,
    When,
    Where,
    What,
    How,
    Why,
    Companion,
}

impl Field {
    /// Display order. Prompts and the form both follow it.
    pub const ALL: [Field; 7] = [
        Field::Who,
        Field::When,
        Field::Where,
        Field::What,
        Field::How,
        Field::Why,
        Field::Companion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Who => "Who",
            Field::When => "When",
            Field::Where => "Where",
            Field::What => "What",
            Field::How => "How",
            Field::Why => "Why",
            Field::Companion => "With whom",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Field::Who => "a student",
            Field::When => "early morning",
            Field::Where => "a quiet library",
            Field::What => "reading an old book",
            Field::How => "quietly",
            Field::Why => "to learn something new",
            Field::Companion => "alone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* =========================
   Structured Fields
   ========================= */

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredFields {
    pub who: String,
    pub when: String,
    #[serde(rename = "where")]
    pub where_: String,
    pub what: String,
    pub how: String,
    pub why: String,
    pub companion: String,
}

impl StructuredFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Who => &self.who,
            Field::When => &self.when,
            Field::Where => &self.where_,
            Field::What => &self.what,
            Field::How => &self.how,
            Field::Why => &self.why,
            Field::Companion => &self.companion,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Who => &mut self.who,
            Field::When => &mut self.when,
            Field::Where => &mut self.where_,
            Field::What => &mut self.what,
            Field::How => &mut self.how,
            Field::Why => &mut self.why,
            Field::Companion => &mut self.companion,
        }
    }

    /// Builder-style setter, mostly for tests and scripted input.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.get_mut(field) = value.into();
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Fields that are empty once surrounding whitespace is ignored.
    pub fn missing(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// The block interpolated into every genre template.
    pub fn to_info_block(&self) -> String {
        let mut block = String::new();
        for (field, value) in self.iter() {
            block.push_str(&format!("- {}: {}\n", field.label(), value));
        }
        block
    }
}
