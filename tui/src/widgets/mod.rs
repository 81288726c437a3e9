//! Reusable UI widgets

pub mod text_block;

pub use text_block::{StyledUnit, TextBlock, TextBlockState};
