//! # songforge
//!
//! Mobile-first AI music workshop built with Leptos and compiled to WASM.
//! Users record a voice sample, have a model trained from it, compose songs
//! from a text prompt, and cut share-ready clips out of the results.
//!
//! Everything runs client side: the studio backend is simulated by timed
//! tasks in `studio`, and the libraries live in reactive context signals.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod studio;
pub mod util;
