//! Task hub: submit/poll/finish bookkeeping for simulated studio work.
//!
//! DESIGN
//! ======
//! Screens never touch timers. They submit a task, render from its status,
//! and a central applier folds finished outputs into app state. The runner
//! module is the only place latency is faked, so a real generation service
//! could replace it without touching any page.

#[cfg(test)]
#[path = "hub_test.rs"]
mod hub_test;

use uuid::Uuid;

/// How many acknowledged finished tasks stay around for inspection.
pub const FINISHED_KEEP: usize = 8;

/// Identifier for a submitted studio task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// What kind of studio work a task stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Turning a saved recording into a usable voice model.
    VoiceTraining,
    /// Composing a full song from the creation draft.
    SongGeneration,
    /// Rendering the selected sub-range of a preview into a saved clip.
    ClipRender,
}

impl TaskKind {
    /// Latency the stand-in runner waits before reporting completion.
    pub fn simulated_delay_ms(self) -> u32 {
        match self {
            Self::VoiceTraining => 5_000,
            Self::SongGeneration => 3_000,
            Self::ClipRender => 1_500,
        }
    }
}

/// Typed result payload per task kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutput {
    /// The voice model that finished training.
    VoiceReady { voice_id: Uuid },
    /// A generated song ready for preview.
    SongReady { title: String, duration_secs: u32 },
    /// A rendered clip cut from a preview take.
    ClipReady { source_title: String, duration_secs: u32 },
}

/// Terminal failure for a task. The simulated runner never produces one,
/// but everything downstream handles it so a real backend could.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFailure {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatus {
    Running,
    Completed(TaskOutput),
    Failed(TaskFailure),
}

/// One submitted task, kept until pruned.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioTask {
    pub id: TaskId,
    pub kind: TaskKind,
    /// Short human label for toasts and logs, e.g. the voice name.
    pub label: String,
    pub status: TaskStatus,
    /// Set once the applier has folded the outcome into app state.
    pub acknowledged: bool,
}

impl StudioTask {
    pub fn is_finished(&self) -> bool {
        !matches!(self.status, TaskStatus::Running)
    }
}

/// In-memory submit/poll/finish hub standing in for a generation backend.
#[derive(Debug, Clone, Default)]
pub struct TaskHub {
    tasks: Vec<StudioTask>,
}

impl TaskHub {
    /// Register new work under a caller-generated id. Status starts
    /// `Running`.
    pub fn submit(&mut self, id: TaskId, kind: TaskKind, label: impl Into<String>) {
        self.tasks.push(StudioTask {
            id,
            kind,
            label: label.into(),
            status: TaskStatus::Running,
            acknowledged: false,
        });
    }

    /// Record the outcome of a running task. Unknown ids and tasks that
    /// already finished are left alone.
    pub fn finish(&mut self, id: TaskId, outcome: Result<TaskOutput, TaskFailure>) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return;
        };
        if task.is_finished() {
            return;
        }
        task.status = match outcome {
            Ok(output) => TaskStatus::Completed(output),
            Err(failure) => TaskStatus::Failed(failure),
        };
    }

    pub fn task(&self, id: TaskId) -> Option<&StudioTask> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn status(&self, id: TaskId) -> Option<&TaskStatus> {
        self.task(id).map(|task| &task.status)
    }

    /// Whether any task of `kind` is still running. Gates the submit
    /// buttons so a screen cannot double-submit the same operation.
    pub fn is_running(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|task| task.kind == kind && !task.is_finished())
    }

    /// Finished tasks the applier has not folded into app state yet, in
    /// submission order.
    pub fn unacknowledged_finished(&self) -> Vec<TaskId> {
        self.tasks
            .iter()
            .filter(|task| task.is_finished() && !task.acknowledged)
            .map(|task| task.id)
            .collect()
    }

    /// Mark a finished task as folded into app state. Running tasks cannot
    /// be acknowledged.
    pub fn acknowledge(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            if task.is_finished() {
                task.acknowledged = true;
            }
        }
    }

    /// Drop the oldest acknowledged tasks beyond [`FINISHED_KEEP`].
    pub fn prune_acknowledged(&mut self) {
        let done = self.tasks.iter().filter(|task| task.acknowledged).count();
        let mut extra = done.saturating_sub(FINISHED_KEEP);
        if extra == 0 {
            return;
        }
        self.tasks.retain(|task| {
            if extra > 0 && task.acknowledged {
                extra -= 1;
                return false;
            }
            true
        });
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
