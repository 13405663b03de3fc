pub mod bootstrap;
pub mod order;
