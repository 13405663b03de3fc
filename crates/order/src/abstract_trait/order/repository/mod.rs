mod command;
mod query;
mod schema;

pub use self::command::{DynOrderCommandRepository, OrderCommandRepositoryTrait};
pub use self::query::{DynOrderQueryRepository, OrderQueryRepositoryTrait};
pub use self::schema::{DynSchemaRepository, SchemaRepositoryTrait};
