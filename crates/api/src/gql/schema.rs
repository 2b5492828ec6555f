use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type ProductSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the federated GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> ProductSchema {
    let introspection_enabled = state.config().introspection;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .enable_federation()
    .data(state) // available in resolvers via ctx.data::<AppState>()
    .limit_depth(10)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
