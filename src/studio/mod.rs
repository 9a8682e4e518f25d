//! The studio task layer: simulated AI operations behind a submit/poll
//! contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens submit work to the [`hub`], the [`runner`] settles it after a
//! simulated delay, and [`apply`] folds outcomes into library, draft, and
//! toast state from one app-level effect.

pub mod apply;
pub mod hub;
pub mod runner;
