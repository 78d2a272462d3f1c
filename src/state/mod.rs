//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs held by `RwSignal` context providers so
//! components depend on small focused models and the logic stays testable
//! without a browser.

pub mod session;
