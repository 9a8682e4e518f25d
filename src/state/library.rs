//! Library state: saved works and voice models.
//!
//! DESIGN
//! ======
//! Works and voices live in one context signal because every mutation path
//! (saving a preview, finishing a training task, deleting from a card menu)
//! funnels through the same list operations, and the stat headers derive
//! from both lists.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use uuid::Uuid;

/// Badge category for a saved work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum WorkKind {
    AiSong,
    VoiceClone,
    VocalSynth,
    Mixdown,
}

impl WorkKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::AiSong => "AI Song",
            Self::VoiceClone => "Voice Clone",
            Self::VocalSynth => "Vocal Synth",
            Self::Mixdown => "Mixdown",
        }
    }

    /// BEM modifier suffix for the badge styling.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::AiSong => "song",
            Self::VoiceClone => "voice",
            Self::VocalSynth => "synth",
            Self::Mixdown => "mixdown",
        }
    }
}

/// A saved library item.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Work {
    pub id: Uuid,
    pub title: String,
    pub kind: WorkKind,
    pub duration_secs: u32,
    /// Display date, `YYYY-MM-DD`.
    pub created_on: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceStatus {
    /// Training task still running; unusable for generation.
    Processing,
    Ready,
}

/// A named voice-clone entry.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceModel {
    pub id: Uuid,
    pub name: String,
    pub status: VoiceStatus,
    /// Length of the recorded sample backing the model.
    pub sample_secs: u32,
}

/// Shared works + voices state behind a context signal.
#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    pub works: Vec<Work>,
    pub voices: Vec<VoiceModel>,
}

impl LibraryState {
    /// Demo catalog the app boots with.
    pub fn seeded() -> Self {
        Self {
            works: vec![
                Work {
                    id: Uuid::new_v4(),
                    title: "Summer Memories".to_owned(),
                    kind: WorkKind::AiSong,
                    duration_secs: 154,
                    created_on: "2024-01-15".to_owned(),
                },
                Work {
                    id: Uuid::new_v4(),
                    title: "My Voice Test".to_owned(),
                    kind: WorkKind::VoiceClone,
                    duration_secs: 105,
                    created_on: "2024-01-14".to_owned(),
                },
                Work {
                    id: Uuid::new_v4(),
                    title: "Birthday Song".to_owned(),
                    kind: WorkKind::VocalSynth,
                    duration_secs: 192,
                    created_on: "2024-01-12".to_owned(),
                },
                Work {
                    id: Uuid::new_v4(),
                    title: "Travel Vlog BGM".to_owned(),
                    kind: WorkKind::Mixdown,
                    duration_secs: 260,
                    created_on: "2024-01-10".to_owned(),
                },
            ],
            voices: vec![
                VoiceModel {
                    id: Uuid::new_v4(),
                    name: "Studio Voice 1".to_owned(),
                    status: VoiceStatus::Ready,
                    sample_secs: 83,
                },
                VoiceModel {
                    id: Uuid::new_v4(),
                    name: "Test Voice".to_owned(),
                    status: VoiceStatus::Ready,
                    sample_secs: 135,
                },
                VoiceModel {
                    id: Uuid::new_v4(),
                    name: "Broadcast Pro".to_owned(),
                    status: VoiceStatus::Processing,
                    sample_secs: 105,
                },
            ],
        }
    }

    /// Newest works first.
    pub fn add_work(&mut self, work: Work) {
        self.works.insert(0, work);
    }

    pub fn remove_work(&mut self, id: Uuid) -> Option<Work> {
        let index = self.works.iter().position(|work| work.id == id)?;
        Some(self.works.remove(index))
    }

    pub fn total_work_secs(&self) -> u32 {
        crate::util::duration::total_secs(self.works.iter().map(|work| work.duration_secs))
    }

    pub fn add_voice(&mut self, voice: VoiceModel) {
        self.voices.insert(0, voice);
    }

    pub fn remove_voice(&mut self, id: Uuid) -> Option<VoiceModel> {
        let index = self.voices.iter().position(|voice| voice.id == id)?;
        Some(self.voices.remove(index))
    }

    /// Flip a trained voice to `Ready`. Returns the name for toasting, or
    /// `None` when the model was deleted before training finished.
    pub fn mark_voice_ready(&mut self, id: Uuid) -> Option<String> {
        let voice = self.voices.iter_mut().find(|voice| voice.id == id)?;
        voice.status = VoiceStatus::Ready;
        Some(voice.name.clone())
    }

    pub fn ready_voices(&self) -> impl Iterator<Item = &VoiceModel> {
        self.voices.iter().filter(|voice| voice.status == VoiceStatus::Ready)
    }

    pub fn processing_voices(&self) -> impl Iterator<Item = &VoiceModel> {
        self.voices.iter().filter(|voice| voice.status == VoiceStatus::Processing)
    }

    pub fn ready_voice_count(&self) -> usize {
        self.ready_voices().count()
    }
}
