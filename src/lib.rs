//! # Cold Plate Models
//!
//! Steady-state thermal and hydraulic screening models for liquid-cooled
//! electronics cold plates, built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a heat load, coolant, flow rate, and channel geometry, the models
//! estimate junction temperature through a lumped series resistance network
//! and the hydraulic cost (pressure drop, pump power) of the flow. A flow-rate
//! optimizer finds the minimum flow that keeps the junction at or below a
//! target temperature.
//!
//! These models are intended for rapid first-pass design screening. They are
//! not a substitute for CFD or hardware validation.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models.

pub mod models;
pub mod support;
