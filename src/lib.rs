//! Client core of a content-idea generator: acquires video content ideas for
//! a business description from an opaque backend, normalizes them into
//! canonical records, synthesizes deterministic placeholders when the backend
//! is unreachable, and runs per-idea follow-up chat sessions.

pub mod backend;
pub mod config;
pub mod errors;
pub mod ideas;
pub mod models;
pub mod service;
pub mod state;
