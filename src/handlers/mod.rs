//! Request handlers.

pub mod product;
