//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Long-running studio work is handed to `studio::runner`
//! and lands back through the context signals.

pub mod create_music;
pub mod home;
pub mod not_found;
pub mod preview;
pub mod templates;
pub mod voice_clone;
pub mod voices;
pub mod works;
