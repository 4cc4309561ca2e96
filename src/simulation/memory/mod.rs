//! Memory systems for the maze explorer.
//!
//! This module provides:
//! - The visitation diary: per-cell record of open and spent exits
//! - The move history: the undo stack of forward steps from the start

pub mod diary;
mod history;

pub use diary::{Diary, VisitRecord};
pub use history::MoveHistory;
