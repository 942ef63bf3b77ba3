//! # fallguard-fuzzy
//!
//! Fuzzy-set primitives for the Fallguard risk model.
//!
//! ## Components
//!
//! - **Universe**: an evenly spaced, inclusive sampling of a variable's domain
//! - **MembershipShape**: triangular, trapezoidal, and union membership functions
//! - **Category / CategorySet**: a closed, ordered set of linguistic categories
//!   sampled over one universe, each with its peak location
//! - **Fuzzified**: per-category degrees for one crisp value, with
//!   first-declared-wins argmax
//! - **normalize**: range mapping onto `[0, 1]`
//!
//! Everything here is immutable once built; a `CategorySet` can be shared
//! freely across threads.

#![deny(unsafe_code)]

pub mod category;
pub mod engine;
pub mod error;
pub mod membership;
pub mod normalize;
pub mod universe;

pub use category::{Category, CategorySet, SampledCategory};
pub use engine::Fuzzified;
pub use error::{FuzzyError, FuzzyResult};
pub use membership::MembershipShape;
pub use normalize::normalize;
pub use universe::Universe;
