//! Feature modules - front-end support
//!
//! This module contains helpers for interactive front ends:
//! - Expression editing with palette insertion

pub mod editor;

pub use editor::ExpressionBuffer;
