//! Declaration blocks: ordered property maps with one level of modifier
//! nesting.
//!
//! A [`Declarations`] block maps property keys to [`Entry`] values. An entry
//! is either a plain value or a [`ModifierBlock`] scoped to a pseudo-state
//! such as `hover` or `hover:focus`. Modifier blocks hold values only, so the
//! structure is at most two levels deep.
//!
//! Blocks are generic over the value type: author-time blocks carry
//! [`TokenValue`](crate::token::TokenValue)s while runtime descriptors carry
//! [`UtilityValue`](crate::runtime::UtilityValue)s.

mod block;
mod entry;

pub use block::Declarations;
pub use entry::{Entry, ModifierBlock};

#[cfg(test)]
mod tests;
