pub mod adapter;
pub mod params;
pub mod row;
pub mod schema;
pub mod transaction;
