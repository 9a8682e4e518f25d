//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`library`, `draft`, `ui`) so screens depend on
//! small focused models. Each lives in an `RwSignal` context installed by
//! the app shell.

pub mod draft;
pub mod library;
pub mod ui;
