pub mod builder;
pub mod config;
pub mod errors;
pub mod factories;
pub mod products;
pub mod prototype;
pub mod singleton;
pub mod types;

#[cfg(test)]
mod tests;
