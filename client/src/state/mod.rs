//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The assistant is a single page, so its ephemeral view state lives in one
//! focused model (`query`) owned by that page.

pub mod query;
