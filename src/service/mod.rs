//! Use-case orchestration between the HTTP boundary and the repo layer.

mod product;

pub use product::ProductService;
