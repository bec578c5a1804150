/// Fixed character tables and uniform sampling.
pub mod charset;

/// Username and password generators.
pub mod generator;
