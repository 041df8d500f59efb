//! Console output for the spdx-stamp binary

pub mod error;
pub mod output;
pub mod terminal;
pub mod text;
pub mod theme;
