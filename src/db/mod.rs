pub mod connection;
pub mod schema;
pub mod sessions;

pub use connection::Database;
