pub mod order;
pub mod schema;
