//! Song creation draft shared between the create and preview screens.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use uuid::Uuid;

/// Which voice sings the generated song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceChoice {
    #[default]
    DefaultMale,
    DefaultFemale,
    /// One of the user's ready voice models.
    Model(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicStyle {
    #[default]
    Pop,
    Classical,
    Electronic,
    Folk,
    Jazz,
    Rock,
}

impl MusicStyle {
    pub const ALL: [Self; 6] =
        [Self::Pop, Self::Classical, Self::Electronic, Self::Folk, Self::Jazz, Self::Rock];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pop => "Pop",
            Self::Classical => "Classical",
            Self::Electronic => "Electronic",
            Self::Folk => "Folk",
            Self::Jazz => "Jazz",
            Self::Rock => "Rock",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Pop => "🎵",
            Self::Classical => "🎻",
            Self::Electronic => "🎹",
            Self::Folk => "🪕",
            Self::Jazz => "🎷",
            Self::Rock => "🎸",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Upbeat,
    Wistful,
    Anthemic,
    Calm,
}

impl Mood {
    pub const ALL: [Self; 4] = [Self::Upbeat, Self::Wistful, Self::Anthemic, Self::Calm];

    pub fn label(self) -> &'static str {
        match self {
            Self::Upbeat => "Upbeat",
            Self::Wistful => "Wistful",
            Self::Anthemic => "Anthemic",
            Self::Calm => "Calm",
        }
    }
}

/// A finished generation, the preview screen's subject.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPiece {
    pub title: String,
    pub duration_secs: u32,
}

/// Everything the create screen collects, plus the generation result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongDraft {
    pub lyrics: String,
    pub prompt: String,
    pub voice: VoiceChoice,
    pub style: MusicStyle,
    pub mood: Mood,
    pub generated: Option<GeneratedPiece>,
}

impl SongDraft {
    /// The mood prompt is the one required field.
    pub fn can_generate(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    /// Title for the piece a generation run will produce, derived from the
    /// prompt so the preview header reads like the request.
    pub fn working_title(&self) -> String {
        let trimmed = self.prompt.trim();
        if trimmed.is_empty() {
            return "Untitled Song".to_owned();
        }
        let mut title: String = trimmed.chars().take(24).collect();
        if trimmed.chars().count() > 24 {
            title.push('…');
        }
        title
    }
}
