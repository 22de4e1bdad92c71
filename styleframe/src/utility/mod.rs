//! Utility factories and autogeneration.
//!
//! A [`UtilityFactory`] turns a map of named values into individually
//! addressable utilities, each owning the declarations its factory closure
//! produced and a generated class name such as `_padding:sm`. Besides
//! explicit registration, a factory can derive entries from raw strings
//! through its [`Autogenerate`] hook:
//!
//! - [`UtilityKeyTransform`](crate::case::UtilityKeyTransform), the default,
//!   turns `@path` into references and anything else into `[value]`.
//! - [`MultiplierAutogenerate`] additionally turns `@N` into
//!   `calc(var(--base) * N)`.

mod autogenerate;
mod factory;

pub use autogenerate::{Autogenerate, MultiplierAutogenerate};
pub use factory::{Utility, UtilityContext, UtilityFactory};
