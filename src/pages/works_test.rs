use super::*;
use crate::state::library::WorkKind;

fn sample_work() -> Work {
    Work {
        id: Uuid::new_v4(),
        title: "Summer Memories".to_string(),
        kind: WorkKind::AiSong,
        duration_secs: 154,
        created_on: "2024-01-15".to_string(),
    }
}

#[test]
fn share_payload_is_valid_json() {
    let payload = share_payload(&sample_work());
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value["app"], "songforge");
    assert_eq!(value["title"], "Summer Memories");
    assert_eq!(value["kind"], "AI Song");
    assert_eq!(value["duration_secs"], 154);
    assert_eq!(value["created_on"], "2024-01-15");
}

#[test]
fn share_payload_tracks_the_work_kind() {
    let mut work = sample_work();
    work.kind = WorkKind::Mixdown;
    let value: serde_json::Value = serde_json::from_str(&share_payload(&work)).unwrap();
    assert_eq!(value["kind"], "Mixdown");
}
