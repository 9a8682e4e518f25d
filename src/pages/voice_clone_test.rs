use super::*;

#[test]
fn sub_second_takes_are_discarded() {
    assert!(!take_is_saveable(0));
    assert!(take_is_saveable(1));
    assert!(take_is_saveable(RECORD_LIMIT_SECS));
}

#[test]
fn voice_name_is_trimmed() {
    assert_eq!(validate_voice_name("  Studio Voice  "), Ok("Studio Voice".to_string()));
}

#[test]
fn blank_voice_name_is_rejected() {
    assert!(validate_voice_name("").is_err());
    assert!(validate_voice_name("   ").is_err());
}

#[test]
fn overlong_voice_name_is_rejected() {
    let name = "x".repeat(41);
    assert!(validate_voice_name(&name).is_err());
    let name = "x".repeat(40);
    assert!(validate_voice_name(&name).is_ok());
}
