//! Core crate for the `Styleframe` design-token and utility-CSS engine.
//!
//! Styles are described as design tokens ([`token`]), grouped into
//! declarations blocks ([`declarations`]), and composed into variant-driven
//! [`recipe`]s. Recipes resolve at author time into declaration maps for the
//! [`emit`] layer, and at run time into class-name strings through
//! [`runtime`]. The [`Styleframe`] registry ties variables, utilities,
//! recipes, and at-rules together and renders the final stylesheet.
//!
//! ```rust
//! use styleframe::Styleframe;
//! use styleframe::declarations::Declarations;
//! use styleframe::recipe::{Recipe, RecipeDefinition, Variant, VariantSelection};
//!
//! let mut sf = Styleframe::default();
//! let primary = sf.variable("color.primary", "#06f");
//! let button = sf.recipe(Recipe::new(
//!     "button",
//!     RecipeDefinition::new()
//!         .base(Declarations::new().set("borderWidth", "thin"))
//!         .variant(
//!             "color",
//!             Variant::new().option("primary", Declarations::new().set("background", primary)),
//!         )
//!         .default_variant("color", "primary"),
//! ));
//!
//! assert_eq!(
//!     button.class_name(&VariantSelection::new()),
//!     "button _border-width:thin _background:color.primary"
//! );
//! assert!(sf.render().contains("--color--primary: #06f;"));
//! ```

pub mod case;
pub mod config;
pub mod declarations;
pub mod document;
pub mod emit;
pub mod recipe;
pub mod registry;
pub mod runtime;
pub mod token;
pub mod utility;
pub mod variable;

mod error;
mod result_ext;

pub use error::{AggregatedErrors, StyleframeError, StyleframeResult};
pub use registry::Styleframe;
pub use result_ext::{IntoFigmentError, ResultIntoFigment, StyleframeResultExt};
