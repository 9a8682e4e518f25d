use super::*;

fn sample_work(title: &str, secs: u32) -> Work {
    Work {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        kind: WorkKind::AiSong,
        duration_secs: secs,
        created_on: "2024-02-01".to_owned(),
    }
}

#[test]
fn seeded_library_matches_the_demo_catalog() {
    let library = LibraryState::seeded();
    assert_eq!(library.works.len(), 4);
    assert_eq!(library.voices.len(), 3);
    assert_eq!(library.ready_voice_count(), 2);
    assert_eq!(library.processing_voices().count(), 1);
    assert_eq!(library.total_work_secs(), 711);
}

#[test]
fn default_library_is_empty() {
    let library = LibraryState::default();
    assert!(library.works.is_empty());
    assert!(library.voices.is_empty());
    assert_eq!(library.total_work_secs(), 0);
}

#[test]
fn add_work_prepends_newest_first() {
    let mut library = LibraryState::seeded();
    let work = sample_work("Fresh Cut", 30);
    let id = work.id;
    library.add_work(work);
    assert_eq!(library.works[0].id, id);
    assert_eq!(library.works.len(), 5);
}

#[test]
fn remove_work_returns_the_removed_entry() {
    let mut library = LibraryState::default();
    let work = sample_work("Gone Soon", 20);
    let id = work.id;
    library.add_work(work);

    let removed = library.remove_work(id).unwrap();
    assert_eq!(removed.title, "Gone Soon");
    assert!(library.works.is_empty());
    assert!(library.remove_work(id).is_none());
}

#[test]
fn mark_voice_ready_flips_status_and_reports_the_name() {
    let mut library = LibraryState::seeded();
    let processing_id = library.processing_voices().next().unwrap().id;

    assert_eq!(library.mark_voice_ready(processing_id).as_deref(), Some("Broadcast Pro"));
    assert_eq!(library.ready_voice_count(), 3);
    assert_eq!(library.processing_voices().count(), 0);
}

#[test]
fn mark_voice_ready_handles_a_deleted_model() {
    let mut library = LibraryState::seeded();
    let processing_id = library.processing_voices().next().unwrap().id;
    library.remove_voice(processing_id);

    assert_eq!(library.mark_voice_ready(processing_id), None);
}

#[test]
fn work_kind_labels_and_modifiers_are_distinct() {
    let kinds = [WorkKind::AiSong, WorkKind::VoiceClone, WorkKind::VocalSynth, WorkKind::Mixdown];
    for (i, a) in kinds.iter().enumerate() {
        for b in kinds.iter().skip(i + 1) {
            assert_ne!(a.label(), b.label());
            assert_ne!(a.css_modifier(), b.css_modifier());
        }
    }
}
