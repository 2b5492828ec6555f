use async_graphql::MergedObject;

use crate::gql::domains::products::ProductQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ProductQuery);
