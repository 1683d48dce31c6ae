//! Command-line front end for the resume editor.

pub mod cli;
pub mod commands;
