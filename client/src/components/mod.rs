//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure views over signals and callbacks handed down by the
//! assistant page; none of them reads context or performs I/O.

pub mod query_details;
pub mod query_section;
pub mod results_table;
