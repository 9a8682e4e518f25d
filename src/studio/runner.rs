//! Simulated latency driver for studio tasks.
//!
//! The only place in the app that fakes generation time. Swapping in a real
//! backend means replacing `launch` with a request, leaving the hub, the
//! applier, and every screen untouched.

#[cfg(feature = "csr")]
use std::time::Duration;

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::studio::hub::{TaskFailure, TaskHub, TaskId, TaskKind, TaskOutput};

/// Submit a task and settle it with `outcome` after the kind's simulated
/// delay. Returns the id so the submitting screen can watch its status.
#[cfg(feature = "csr")]
pub fn launch(
    hub: RwSignal<TaskHub>,
    kind: TaskKind,
    label: impl Into<String>,
    outcome: Result<TaskOutput, TaskFailure>,
) -> TaskId {
    let id = TaskId::new();
    let label = label.into();
    hub.update(|hub| hub.submit(id, kind, label));
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(kind.simulated_delay_ms()))).await;
        hub.update(|hub| hub.finish(id, outcome));
    });
    id
}
