use async_graphql::MergedObject;

use crate::gql::domains::products::ProductMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(ProductMutation);
