mod database;

pub use self::database::{ConnectionManager, ConnectionPool, DatabaseConfig};
