use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::error::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingGenre {
    #[default]
    Poem,
    Essay,
    ShortStory,
    Report,
}

impl WritingGenre {
    pub const ALL: [WritingGenre; 4] = [
        WritingGenre::Poem,
        WritingGenre::Essay,
        WritingGenre::ShortStory,
        WritingGenre::Report,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WritingGenre::Poem => "Poem",
            WritingGenre::Essay => "Essay",
            WritingGenre::ShortStory => "Short story",
            WritingGenre::Report => "Report",
        }
    }
}

impl fmt::Display for WritingGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WritingGenre {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");

        match normalized.as_str() {
            "poem" => Ok(WritingGenre::Poem),
            "essay" => Ok(WritingGenre::Essay),
            "short story" | "story" => Ok(WritingGenre::ShortStory),
            "report" => Ok(WritingGenre::Report),
            _ => Err(GenerationError::UnknownGenre(s.to_string())),
        }
    }
}
