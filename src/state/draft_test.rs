use super::*;

#[test]
fn default_draft_cannot_generate() {
    let draft = SongDraft::default();
    assert!(!draft.can_generate());
    assert_eq!(draft.voice, VoiceChoice::DefaultMale);
    assert_eq!(draft.style, MusicStyle::Pop);
    assert_eq!(draft.mood, Mood::Upbeat);
    assert_eq!(draft.generated, None);
}

#[test]
fn whitespace_prompt_does_not_unlock_generation() {
    let mut draft = SongDraft { prompt: "   \n  ".to_owned(), ..SongDraft::default() };
    assert!(!draft.can_generate());
    draft.prompt = "sunset drive".to_owned();
    assert!(draft.can_generate());
}

#[test]
fn working_title_echoes_a_short_prompt() {
    let draft = SongDraft { prompt: "  Neon skyline at dusk  ".to_owned(), ..SongDraft::default() };
    assert_eq!(draft.working_title(), "Neon skyline at dusk");
}

#[test]
fn working_title_truncates_long_prompts() {
    let draft = SongDraft {
        prompt: "a very long and winding description of a song".to_owned(),
        ..SongDraft::default()
    };
    let title = draft.working_title();
    assert_eq!(title.chars().count(), 25);
    assert!(title.ends_with('…'));
}

#[test]
fn working_title_falls_back_when_empty() {
    let draft = SongDraft::default();
    assert_eq!(draft.working_title(), "Untitled Song");
}

#[test]
fn style_catalog_is_complete_and_labeled() {
    assert_eq!(MusicStyle::ALL.len(), 6);
    for style in MusicStyle::ALL {
        assert!(!style.label().is_empty());
        assert!(!style.glyph().is_empty());
    }
    assert_eq!(Mood::ALL.len(), 4);
}
