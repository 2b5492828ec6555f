use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool, Result as SqlxResult};

use crate::error::{RepoError, RepoResult};
use crate::models::{ProductDetail, ProductDetailRow};

/// Eager-loaded product read: pricing, inventory, supplier and supplier
/// contact are always joined in. The argument is appended after the joins.
macro_rules! product_detail_sql {
    ($tail:literal) => {
        concat!(
            r#"
            SELECT p.id, p.name, p.description, p.category, p.brand, p.sku,
                   p.supplier_id, p.created_at, p.updated_at,
                   pp.id AS pricing_id, pp.list_price, pp.discount, pp.net_price, pp.currency,
                   pi.id AS inventory_id, pi.stock, pi.warehouse_location, pi.reorder_level,
                   s.name AS supplier_name,
                   s.created_at AS supplier_created_at,
                   s.updated_at AS supplier_updated_at,
                   sc.id AS contact_id, sc.contact_name,
                   sc.email AS contact_email,
                   sc.phone AS contact_phone,
                   sc.address AS contact_address
            FROM products p
            LEFT JOIN product_pricing pp ON pp.product_id = p.id
            LEFT JOIN product_inventory pi ON pi.product_id = p.id
            LEFT JOIN suppliers s ON s.id = p.supplier_id
            LEFT JOIN supplier_contacts sc ON sc.supplier_id = s.id
            "#,
            $tail
        )
    };
}

#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub supplier_id: Option<i64>,
}

/// Scalar product columns for an update; `None` keeps the stored value.
/// Nullable columns take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub brand: Option<Option<String>>,
    pub sku: Option<Option<String>>,
    pub supplier_id: Option<Option<i64>>,
}

/// Full pricing record to write. `net_price` is always derived by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingWrite {
    pub list_price: Decimal,
    pub discount: Decimal,
    pub net_price: Decimal,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryWrite {
    pub stock: i32,
    pub warehouse_location: Option<String>,
    pub reorder_level: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub product: NewProduct,
    pub pricing: PricingWrite,
    pub inventory: InventoryWrite,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub product: ProductFields,
    pub pricing: Option<PricingWrite>,
    pub inventory: Option<InventoryWrite>,
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i64,
) -> SqlxResult<Option<ProductDetail>> {
    let row = sqlx::query_as::<_, ProductDetailRow>(product_detail_sql!("WHERE p.id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(ProductDetail::from))
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ProductDetail>> {
    let rows = sqlx::query_as::<_, ProductDetailRow>(product_detail_sql!("ORDER BY p.id ASC"))
        .fetch_all(executor)
        .await?;

    Ok(rows.into_iter().map(ProductDetail::from).collect())
}

pub async fn list_by_category<'e>(
    executor: impl PgExecutor<'e>,
    category: &str,
) -> SqlxResult<Vec<ProductDetail>> {
    let rows = sqlx::query_as::<_, ProductDetailRow>(product_detail_sql!(
        "WHERE p.category = $1 ORDER BY p.id ASC"
    ))
    .bind(category)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(ProductDetail::from).collect())
}

/// Insert a product with its pricing and inventory records in one transaction.
pub async fn create(pool: &PgPool, data: CreateProduct) -> RepoResult<ProductDetail> {
    let mut tx = pool.begin().await?;

    let product_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO products (name, description, category, brand, sku, supplier_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(&data.product.name)
    .bind(&data.product.description)
    .bind(&data.product.category)
    .bind(&data.product.brand)
    .bind(&data.product.sku)
    .bind(data.product.supplier_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO product_pricing (product_id, list_price, discount, net_price, currency)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(product_id)
    .bind(data.pricing.list_price)
    .bind(data.pricing.discount)
    .bind(data.pricing.net_price)
    .bind(&data.pricing.currency)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO product_inventory (product_id, stock, warehouse_location, reorder_level)
        VALUES ($1, $2, $3, COALESCE($4, 0))
        "#,
    )
    .bind(product_id)
    .bind(data.inventory.stock)
    .bind(&data.inventory.warehouse_location)
    .bind(data.inventory.reorder_level)
    .execute(&mut *tx)
    .await?;

    let detail = get_by_id(&mut *tx, product_id)
        .await?
        .ok_or(RepoError::NotFound {
            entity: "Product",
            id: product_id,
        })?;

    tx.commit().await?;

    tracing::debug!(product_id, "Inserted product with pricing and inventory");
    Ok(detail)
}

/// Update a product and, when present, its pricing and inventory records.
/// A pricing or inventory write against a product lacking that record fails
/// and rolls the whole update back.
pub async fn update(pool: &PgPool, id: i64, data: UpdateProduct) -> RepoResult<ProductDetail> {
    let mut tx = pool.begin().await?;

    let updated: Option<i64> = sqlx::query_scalar(
        r#"
        UPDATE products
        SET name = COALESCE($2, name),
            description = CASE WHEN $3 THEN $4 ELSE description END,
            category = CASE WHEN $5 THEN $6 ELSE category END,
            brand = CASE WHEN $7 THEN $8 ELSE brand END,
            sku = CASE WHEN $9 THEN $10 ELSE sku END,
            supplier_id = CASE WHEN $11 THEN $12 ELSE supplier_id END,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id
        "#,
    )
    .bind(id)
    .bind(&data.product.name)
    .bind(data.product.description.is_some())
    .bind(data.product.description.as_ref().and_then(|v| v.as_deref()))
    .bind(data.product.category.is_some())
    .bind(data.product.category.as_ref().and_then(|v| v.as_deref()))
    .bind(data.product.brand.is_some())
    .bind(data.product.brand.as_ref().and_then(|v| v.as_deref()))
    .bind(data.product.sku.is_some())
    .bind(data.product.sku.as_ref().and_then(|v| v.as_deref()))
    .bind(data.product.supplier_id.is_some())
    .bind(data.product.supplier_id.flatten())
    .fetch_optional(&mut *tx)
    .await?;

    if updated.is_none() {
        return Err(RepoError::NotFound {
            entity: "Product",
            id,
        });
    }

    if let Some(pricing) = &data.pricing {
        let result = sqlx::query(
            r#"
            UPDATE product_pricing
            SET list_price = $2,
                discount = $3,
                net_price = $4,
                currency = COALESCE($5, currency)
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .bind(pricing.list_price)
        .bind(pricing.discount)
        .bind(pricing.net_price)
        .bind(&pricing.currency)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound {
                entity: "ProductPricing",
                id,
            });
        }
    }

    if let Some(inventory) = &data.inventory {
        let result = sqlx::query(
            r#"
            UPDATE product_inventory
            SET stock = $2,
                warehouse_location = COALESCE($3, warehouse_location),
                reorder_level = COALESCE($4, reorder_level)
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .bind(inventory.stock)
        .bind(&inventory.warehouse_location)
        .bind(inventory.reorder_level)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound {
                entity: "ProductInventory",
                id,
            });
        }
    }

    let detail = get_by_id(&mut *tx, id).await?.ok_or(RepoError::NotFound {
        entity: "Product",
        id,
    })?;

    tx.commit().await?;

    tracing::debug!(
        product_id = id,
        pricing = data.pricing.is_some(),
        inventory = data.inventory.is_some(),
        "Updated product"
    );
    Ok(detail)
}

/// Delete a product. Owned pricing and inventory rows go with it.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound {
            entity: "Product",
            id,
        });
    }

    Ok(true)
}
