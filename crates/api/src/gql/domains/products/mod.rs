pub mod remap;
pub mod resolvers;
pub mod types;

pub use resolvers::{ProductMutation, ProductQuery};
