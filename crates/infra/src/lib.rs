pub mod db;
pub mod error;
pub mod models;
pub mod repos;

pub use error::{RepoError, RepoResult};
