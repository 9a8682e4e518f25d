//! Fold finished studio tasks into app state.
//!
//! One applier handles every task kind so a completion always lands, no
//! matter which screen is mounted when it arrives. The app shell runs it
//! from an effect whenever the hub reports unacknowledged finished work.

#[cfg(test)]
#[path = "apply_test.rs"]
mod apply_test;

use uuid::Uuid;

use crate::state::draft::{GeneratedPiece, SongDraft};
use crate::state::library::{LibraryState, Work, WorkKind};
use crate::state::ui::ToastQueue;
use crate::studio::hub::{TaskHub, TaskOutput, TaskStatus};

/// Apply every finished, unacknowledged task, then prune old bookkeeping.
/// `today` is the display date stamped onto works created here.
pub fn apply_finished(
    hub: &mut TaskHub,
    library: &mut LibraryState,
    draft: &mut SongDraft,
    toasts: &mut ToastQueue,
    today: &str,
) {
    for id in hub.unacknowledged_finished() {
        let Some(task) = hub.task(id) else {
            continue;
        };
        let label = task.label.clone();
        let status = task.status.clone();
        match status {
            TaskStatus::Completed(output) => {
                apply_output(output, library, draft, toasts, today);
            }
            TaskStatus::Failed(failure) => {
                leptos::logging::warn!("studio task failed: {} ({})", label, failure.reason);
                toasts.error(format!("{label} failed: {}", failure.reason));
            }
            TaskStatus::Running => {}
        }
        hub.acknowledge(id);
    }
    hub.prune_acknowledged();
}

fn apply_output(
    output: TaskOutput,
    library: &mut LibraryState,
    draft: &mut SongDraft,
    toasts: &mut ToastQueue,
    today: &str,
) {
    match output {
        TaskOutput::VoiceReady { voice_id } => match library.mark_voice_ready(voice_id) {
            Some(name) => {
                toasts.success(format!("Voice model \"{name}\" is ready"));
            }
            None => {
                leptos::logging::warn!("trained voice {voice_id} was deleted before it finished");
            }
        },
        TaskOutput::SongReady { title, duration_secs } => {
            draft.generated = Some(GeneratedPiece { title, duration_secs });
            toasts.success("Your song is ready");
        }
        TaskOutput::ClipReady { source_title, duration_secs } => {
            library.add_work(Work {
                id: Uuid::new_v4(),
                title: format!("{source_title} (clip)"),
                kind: WorkKind::AiSong,
                duration_secs,
                created_on: today.to_owned(),
            });
            toasts.success("Clip saved to your works");
        }
    }
}
