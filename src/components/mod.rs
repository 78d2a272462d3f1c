//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls and shared chrome while reading and
//! writing shared state from Leptos context providers.

pub mod document_list;
pub mod money_input;
pub mod municipality_select;
pub mod nav_bar;
