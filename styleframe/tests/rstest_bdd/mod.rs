//! Behavioural tests for `styleframe` using `rstest-bdd`.
//!
//! [`fixtures`] holds the scenario state shared between steps, [`steps`]
//! registers the step definitions, and [`scenarios`] binds the `.feature`
//! files under `tests/features/` to them.

mod fixtures;
mod scenarios;
mod steps;
