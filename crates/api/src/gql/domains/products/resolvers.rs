use async_graphql::{Context, MaybeUndefined, Object, Result, ID};
use rust_decimal::Decimal;

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::products;

use super::remap;
use super::types::{CreateProductArgs, Product, UpdateProductArgs};

#[derive(Default)]
pub struct ProductQuery;

#[Object]
impl ProductQuery {
    /// Get a single product with its pricing, inventory and supplier
    async fn get_product(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Product>> {
        let state = ctx.data::<AppState>()?;
        let id = remap::parse_id(&id)?;

        let detail = products::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;

        Ok(detail.map(Product::from))
    }

    async fn list_products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let state = ctx.data::<AppState>()?;
        let rows = products::list(&state.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Products whose category exactly matches the argument
    async fn products_by_category(
        &self,
        ctx: &Context<'_>,
        category: String,
    ) -> Result<Vec<Product>> {
        let state = ctx.data::<AppState>()?;
        let rows = products::list_by_category(&state.db, &category)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Federation entry point: hydrate a `Product` reference by its key
    #[graphql(entity)]
    async fn find_product_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Product>> {
        let state = ctx.data::<AppState>()?;
        let id = remap::parse_id(&id)?;

        let detail = products::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;

        Ok(detail.map(Product::from))
    }
}

#[derive(Default)]
pub struct ProductMutation;

#[Object]
impl ProductMutation {
    /// Create a product together with its pricing and inventory
    #[allow(clippy::too_many_arguments)]
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: Option<String>,
        category: Option<String>,
        brand: Option<String>,
        sku: Option<String>,
        supplier_id: Option<ID>,
        list_price: Decimal,
        discount: Option<Decimal>,
        currency: String,
        stock: i32,
        warehouse_location: Option<String>,
        reorder_level: Option<i32>,
    ) -> Result<Product> {
        let state = ctx.data::<AppState>()?;

        let data = remap::for_create(CreateProductArgs {
            name,
            description,
            category,
            brand,
            sku,
            supplier_id,
            list_price,
            discount,
            currency,
            stock,
            warehouse_location,
            reorder_level,
        })?;

        let detail = products::create(&state.db, data)
            .await
            .map_err(GqlError::from)?;

        tracing::info!(
            product_id = detail.product.id,
            category = detail.product.category.as_deref().unwrap_or(""),
            "Product created"
        );

        Ok(detail.into())
    }

    /// Update a product. Pricing is rewritten when `listPrice` is given,
    /// inventory when `stock` is given. Passing `null` clears a nullable field.
    #[allow(clippy::too_many_arguments)]
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: MaybeUndefined<String>,
        category: MaybeUndefined<String>,
        brand: MaybeUndefined<String>,
        sku: MaybeUndefined<String>,
        supplier_id: MaybeUndefined<ID>,
        list_price: Option<Decimal>,
        discount: Option<Decimal>,
        currency: Option<String>,
        stock: Option<i32>,
        warehouse_location: Option<String>,
        reorder_level: Option<i32>,
    ) -> Result<Product> {
        let state = ctx.data::<AppState>()?;
        let id = remap::parse_id(&id)?;

        let data = remap::for_update(UpdateProductArgs {
            name,
            description,
            category,
            brand,
            sku,
            supplier_id,
            list_price,
            discount,
            currency,
            stock,
            warehouse_location,
            reorder_level,
        })?;

        let detail = products::update(&state.db, id, data)
            .await
            .map_err(GqlError::from)?;

        tracing::info!(product_id = id, "Product updated");

        Ok(detail.into())
    }

    async fn delete_product(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let id = remap::parse_id(&id)?;

        let deleted = products::delete(&state.db, id)
            .await
            .map_err(GqlError::from)?;

        tracing::info!(product_id = id, "Product deleted");

        Ok(deleted)
    }
}
