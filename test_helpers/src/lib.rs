//! Test helpers shared across crates in the styleframe workspace.
//!
//! - [`figment`] wraps `figment::Jail` for configuration tests.
//! - [`logging`] installs a `tracing` subscriber that writes through the
//!   test harness.
//! - [`text`] normalises values captured by behavioural test steps.

pub mod figment;
pub mod logging;
pub mod text;
