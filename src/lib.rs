// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Animation math compares against exact constants and converts counts to
// floats throughout; these pedantic lints fight that constantly.
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::module_name_repetitions)]

//! Camera choreography and adaptive render-quality core for real-time 3D
//! scenes.
//!
//! Vantage owns a single [`pose::CameraPose`] and moves it between named
//! viewpoints with eased, time-bounded transitions. Around that core it
//! layers autonomous idle orbiting, pointer-reactive subject motion, a
//! safe-volume guardian, and a frame-rate-driven quality ladder.
//!
//! # Key entry points
//!
//! - [`director::Director`] - the coordinator; one `advance(now)` per frame
//! - [`options::Options`] - runtime configuration with TOML preset support
//! - [`subject::ControlledObject`] - the externally-owned reactive subject
//! - [`capability::DeviceCapabilities`] - injected device descriptor that
//!   selects the constrained parameter set
//!
//! # Architecture
//!
//! The host render loop drives [`director::Director::advance`] with an
//! explicit timestamp; every component derives its behavior from wall-clock
//! time, never from frame counts, so dropped frames stretch nothing. The
//! director routes cross-component reactions (startup completion, idle
//! return, bounds recovery) and reports what happened each tick as
//! [`director::TickEvents`].

pub mod bounds;
pub mod capability;
pub mod choreography;
pub mod director;
pub mod error;
pub mod idle;
pub mod options;
pub mod pointer;
pub mod pose;
pub mod quality;
pub mod subject;
pub mod util;
