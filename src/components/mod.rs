//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome and the shared interaction surfaces
//! while reading/writing app state from Leptos context providers.

pub mod action_menu;
pub mod clip_editor;
pub mod header;
pub mod layout;
pub mod nav;
pub mod toast;
pub mod wave_meter;
