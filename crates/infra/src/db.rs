use sqlx::PgPool;

/// Shared connection pool handed to every repository call.
pub type Db = PgPool;
