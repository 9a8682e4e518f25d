use super::*;
use crate::state::ui::ToastKind;
use crate::studio::hub::{TaskFailure, TaskId, TaskKind};

struct Fixture {
    hub: TaskHub,
    library: LibraryState,
    draft: SongDraft,
    toasts: ToastQueue,
}

impl Fixture {
    fn new() -> Self {
        Self {
            hub: TaskHub::default(),
            library: LibraryState::seeded(),
            draft: SongDraft::default(),
            toasts: ToastQueue::default(),
        }
    }

    fn apply(&mut self) {
        apply_finished(&mut self.hub, &mut self.library, &mut self.draft, &mut self.toasts, "2024-02-01");
    }

    fn finish_task(&mut self, kind: TaskKind, label: &str, outcome: Result<TaskOutput, TaskFailure>) -> TaskId {
        let id = TaskId::new();
        self.hub.submit(id, kind, label);
        self.hub.finish(id, outcome);
        id
    }
}

#[test]
fn running_tasks_are_left_alone() {
    let mut fx = Fixture::new();
    let id = TaskId::new();
    fx.hub.submit(id, TaskKind::SongGeneration, "pending");
    fx.apply();

    assert!(fx.toasts.notes().is_empty());
    assert!(!fx.hub.task(id).unwrap().acknowledged);
}

#[test]
fn voice_ready_flips_the_library_model_and_toasts() {
    let mut fx = Fixture::new();
    let voice_id = fx.library.processing_voices().next().unwrap().id;
    let id =
        fx.finish_task(TaskKind::VoiceTraining, "Broadcast Pro", Ok(TaskOutput::VoiceReady { voice_id }));
    fx.apply();

    assert_eq!(fx.library.ready_voice_count(), 3);
    assert_eq!(fx.toasts.notes().len(), 1);
    assert_eq!(fx.toasts.notes()[0].kind, ToastKind::Success);
    assert!(fx.toasts.notes()[0].message.contains("Broadcast Pro"));
    assert!(fx.hub.task(id).unwrap().acknowledged);
}

#[test]
fn voice_ready_for_a_deleted_model_is_silent() {
    let mut fx = Fixture::new();
    let voice_id = fx.library.processing_voices().next().unwrap().id;
    fx.library.remove_voice(voice_id);
    fx.finish_task(TaskKind::VoiceTraining, "Broadcast Pro", Ok(TaskOutput::VoiceReady { voice_id }));
    fx.apply();

    assert!(fx.toasts.notes().is_empty());
    assert_eq!(fx.library.ready_voice_count(), 2);
}

#[test]
fn song_ready_lands_in_the_draft() {
    let mut fx = Fixture::new();
    fx.finish_task(
        TaskKind::SongGeneration,
        "Neon skyline",
        Ok(TaskOutput::SongReady { title: "Neon skyline".to_owned(), duration_secs: 154 }),
    );
    fx.apply();

    let piece = fx.draft.generated.as_ref().unwrap();
    assert_eq!(piece.title, "Neon skyline");
    assert_eq!(piece.duration_secs, 154);
    assert_eq!(fx.toasts.notes()[0].message, "Your song is ready");
}

#[test]
fn clip_ready_appends_a_dated_work() {
    let mut fx = Fixture::new();
    let works_before = fx.library.works.len();
    fx.finish_task(
        TaskKind::ClipRender,
        "Summer Tide",
        Ok(TaskOutput::ClipReady { source_title: "Summer Tide".to_owned(), duration_secs: 46 }),
    );
    fx.apply();

    assert_eq!(fx.library.works.len(), works_before + 1);
    let newest = &fx.library.works[0];
    assert_eq!(newest.title, "Summer Tide (clip)");
    assert_eq!(newest.duration_secs, 46);
    assert_eq!(newest.created_on, "2024-02-01");
    assert_eq!(newest.kind, WorkKind::AiSong);
}

#[test]
fn failures_surface_as_error_toasts() {
    let mut fx = Fixture::new();
    fx.finish_task(
        TaskKind::SongGeneration,
        "Neon skyline",
        Err(TaskFailure { reason: "model offline".to_owned() }),
    );
    fx.apply();

    assert_eq!(fx.toasts.notes().len(), 1);
    assert_eq!(fx.toasts.notes()[0].kind, ToastKind::Error);
    assert!(fx.toasts.notes()[0].message.contains("model offline"));
    assert!(fx.draft.generated.is_none());
}

#[test]
fn a_second_apply_is_a_no_op() {
    let mut fx = Fixture::new();
    let voice_id = fx.library.processing_voices().next().unwrap().id;
    fx.finish_task(TaskKind::VoiceTraining, "Broadcast Pro", Ok(TaskOutput::VoiceReady { voice_id }));
    fx.apply();
    fx.apply();

    assert_eq!(fx.toasts.notes().len(), 1);
}
