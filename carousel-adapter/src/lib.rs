//! Storefront adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on rotation math and
//! gesture state. This crate provides the storefront-side glue commonly
//! needed around it:
//!
//! - the [`Product`] value, tab parsing and tab-driven price sorting
//! - a memoizing product source with time-based revalidation
//! - a framework-neutral [`Controller`] that owns the engine pair, keeps the
//!   drag machine in sync with layout metrics, and applies released shifts
//!   to the rotation owner
//!
//! This crate is intentionally framework-agnostic (no DOM/GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod product;
mod source;


pub use controller::Controller;
pub use product::{Product, ProductTab, sort_products};
pub use source::{CachedProducts, DEFAULT_REVALIDATE_MS, ProductSource, ProductsRequest};
