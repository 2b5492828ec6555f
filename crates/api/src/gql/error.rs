use infra::RepoError;

use super::domains::products::remap::RemapError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `From<sqlx::Error>` / `From<RepoError>`: logs the DB detail, shows a sanitized message
///   - `NotFound`: "Product 42 not found"
///   - `From<RemapError>`: shows "Invalid ID: …"
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    NotFound { entity: &'static str, id: i64 },
    Remap(RemapError),
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                match e {
                    sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                        write!(f, "Referenced record does not exist")
                    }
                    _ => write!(f, "Internal database error"),
                }
            }
            GqlError::NotFound { entity, id } => write!(f, "{entity} {id} not found"),
            GqlError::Remap(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

impl From<RepoError> for GqlError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound { entity, id } => GqlError::NotFound { entity, id },
            RepoError::Db(e) => GqlError::Sqlx(e),
        }
    }
}

impl From<RemapError> for GqlError {
    fn from(e: RemapError) -> Self {
        GqlError::Remap(e)
    }
}
