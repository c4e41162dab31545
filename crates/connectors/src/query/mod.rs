pub mod demo;
pub mod factory;
