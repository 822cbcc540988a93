//! Core engine for a personal photo and video browser.
//!
//! The library covers the non-widget half of the application: listing the
//! media files of a folder, sorting and searching the loaded list, grouping
//! perceptually identical images into duplicate pairs, and a recycle-bin
//! ledger that makes deletes reversible in one batch undo.

pub mod app;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
