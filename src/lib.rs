//! Side-scrolling runner: a player jumps over scrolling scenery, dodges
//! enemies, then survives a mid-stage boss that fires beams and drops meteors.
//!
//! - `entities`: pure data
//! - `compute`: pure per-tick logic
//! - `assets` / `ground`: images, placeholders, ground-line detection
//! - `canvas` / `render`: software drawing, independent of the terminal

pub mod assets;
pub mod canvas;
pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod ground;
pub mod render;
pub mod stage;
