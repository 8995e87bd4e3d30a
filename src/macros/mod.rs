//! Creational macros
//!
//! Declarative macros that cut the boilerplate of wiring creators together.

#[macro_use]
pub mod registry_macros;
