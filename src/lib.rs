//! FruitLife library - testable control logic for the fruit storage monitor.
//!
//! This library contains the measurement, classification and setpoint logic
//! that can be tested on the host machine. The binary (`main.rs`) uses this
//! library and adds the RP2040-specific peripheral code.
//!
//! # Data Flow
//!
//! Per iteration of the control loop:
//!
//! ```text
//! sampler -> classify -> actuators -> stats -> screen/faces
//!               ^
//!               |  snapshot()
//!         SharedControl  <--- publish() ---  MenuState (button task)
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Input and shared state
pub mod state;

// Measurement pipeline
pub mod actuators;
pub mod classify;
pub mod controller;
pub mod sampler;
pub mod stats;

// Presentation
pub mod blink;
pub mod faces;
pub mod screen;
pub mod tones;

// Types the firmware loop and host runner use directly
pub use classify::Label;
pub use controller::{Controller, Frame};
pub use state::{Channel, ControlSnapshot, MenuState, SharedControl};
