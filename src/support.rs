//! Supporting utilities shared by models.
//!
//! - [`constraint`]: Sign checks used for input validation.
//! - [`units`]: Extensions to [`uom`] for quantities it does not provide.

pub mod constraint;
pub mod units;
