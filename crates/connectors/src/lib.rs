pub mod config;
pub mod error;
pub mod query;
pub mod repository;
pub mod sql;
