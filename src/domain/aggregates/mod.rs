//! Aggregates module
pub mod cart;
pub mod order;

pub use cart::{Cart, CartLine};
pub use order::OrderDraft;
