//! weekflow - week-windowed flow chart layout
//!
//! Given users, their projects and tasks, and a visible week, this library
//! decides what each user sees that week and stacks it into a row.
//!
//! # Core Concepts
//!
//! - **Ownership**: a user's row holds projects they lead or hold tasks in
//! - **Visibility**: projects and tasks are shown only if they touch the week
//! - **Stacking**: visible projects are placed top to bottom without overlap
//!
//! # Module Organization
//!
//! - `model`: users, projects, tasks and the derived layout types
//! - `window`: the visible week and week navigation
//! - `ownership`: which projects and tasks belong to a user's row
//! - `visibility`: project/task visibility rules
//! - `layout`: the stacking engine and pixel metrics
//! - `board`: rows for every user of a snapshot
//! - `snapshot`: reading exported snapshots
//! - `config`: `.weekflow.toml` loading
//! - `cli`, `output`, `error`: the command-line surface

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod output;
pub mod ownership;
pub mod snapshot;
pub mod visibility;
pub mod window;

pub use error::{Error, Result};
