//! Resilient interaction layer for script-rendered web pages.
//!
//! This crate provides the primitives every page-specific workflow builds
//! on: navigation with timeout tolerance, element waits, retrying action
//! execution (click, fill, select), generic condition polling, and failure
//! diagnostics via screenshot capture.
//!
//! The underlying rendering engine stays behind the [`PageDriver`] port;
//! this layer only adds resilience semantics around its primitives. Every
//! blocking call is classified up front as *hard* (returns a typed failure)
//! or *soft* (absorbed locally and surfaced as a warning or boolean), so
//! callers never have to infer timeout behavior from call sites.

mod actions;
pub mod config;
pub mod diagnostics;
pub mod errors;
mod interactor;
pub mod poll;
pub mod ports;
pub mod redact;
mod retry;
mod waiting;

pub use config::InteractConfig;
pub use diagnostics::{DiagnosticArtifact, Diagnostics};
pub use errors::{ActionKind, InteractError};
pub use interactor::Interactor;
pub use poll::wait_until;
pub use ports::{DriverError, DriverErrorKind, ElementHandle, PageDriver, UntilPolicy};
pub use retry::retry;
