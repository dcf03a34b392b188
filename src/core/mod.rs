//! Core quote logic
//!
//! The data model and the topic resolution algorithm, kept free of any
//! presentation or I/O concerns.

pub mod data;
pub mod resolver;
