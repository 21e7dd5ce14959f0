//! Developer tooling for the swipe engine: settings validation, mapping
//! lookups and replay of recorded drag traces.

pub mod commands;
