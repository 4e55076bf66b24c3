//! Thermal systems models.
//!
//! This module contains models for liquid cooling hardware.

pub mod cold_plate;
