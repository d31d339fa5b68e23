//! Mogra Storefront
//!
//! Single-page shop for the Mogra flower studio.
//!
//! ## Features
//! - Fixed flower catalog, built in or loaded from JSON
//! - Session-scoped shopping cart with merge-on-add semantics
//! - WhatsApp order hand-off: checkout composes a pre-filled chat link,
//!   no payment or fulfillment happens here
//!
//! The cart and the message formatter are framework-free; the terminal shell
//! in `main.rs` is one possible front end and any other view can drive the
//! same operations.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod whatsapp;

pub use catalog::{Catalog, CatalogError, Category, Flower};
pub use config::{ConfigError, StoreConfig};
pub use domain::aggregates::{Cart, CartLine, OrderDraft};
pub use domain::value_objects::{Quantity, Rupees};
