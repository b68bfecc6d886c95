//! Connection pooling over Diesel's r2d2 integration.

use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Shared connection pool. `r2d2::Pool` is cheap to clone.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A single checked-out pooled connection.
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build a connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
