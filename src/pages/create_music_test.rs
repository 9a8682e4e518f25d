use super::*;

#[test]
fn voice_options_start_with_the_defaults() {
    let library = LibraryState::default();
    let options = voice_options(&library);
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].0, VoiceChoice::DefaultMale);
    assert_eq!(options[1].0, VoiceChoice::DefaultFemale);
}

#[test]
fn ready_models_are_offered_processing_ones_are_not() {
    let library = LibraryState::seeded();
    let options = voice_options(&library);
    assert_eq!(options.len(), 2 + library.ready_voice_count());
    let names: Vec<&str> = options.iter().map(|(_, name)| name.as_str()).collect();
    assert!(names.contains(&"Studio Voice 1"));
    assert!(names.contains(&"Test Voice"));
    assert!(!names.contains(&"Broadcast Pro"));
}

#[test]
fn model_options_carry_the_library_id() {
    let library = LibraryState::seeded();
    let options = voice_options(&library);
    let ready_id = library.ready_voices().next().map(|v| v.id);
    assert!(options.iter().any(|(choice, _)| match choice {
        VoiceChoice::Model(id) => Some(*id) == ready_id,
        _ => false,
    }));
}

#[test]
fn generated_song_length_is_plausible() {
    assert!(GENERATED_SONG_SECS > 60);
    assert!(GENERATED_SONG_SECS < 600);
}
