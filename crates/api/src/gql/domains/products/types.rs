use async_graphql::{MaybeUndefined, SimpleObject, ID};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use infra::models::{
    ProductDetail, ProductInventoryRow, ProductPricingRow, SupplierContactRow, SupplierDetail,
};

// ── Output types ──

#[derive(SimpleObject, Clone, Debug)]
pub struct SupplierContact {
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<SupplierContactRow> for SupplierContact {
    fn from(row: SupplierContactRow) -> Self {
        Self {
            contact_name: row.contact_name,
            email: row.email,
            phone: row.phone,
            address: row.address,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Supplier {
    pub id: ID,
    pub name: String,
    pub contact: Option<SupplierContact>,
}

impl From<SupplierDetail> for Supplier {
    fn from(detail: SupplierDetail) -> Self {
        Self {
            id: detail.supplier.id.into(),
            name: detail.supplier.name,
            contact: detail.contact.map(SupplierContact::from),
        }
    }
}

/// Pricing of a product. `netPrice` is always `listPrice - discount`.
#[derive(SimpleObject, Clone, Debug)]
pub struct ProductPricing {
    pub list_price: Decimal,
    pub discount: Decimal,
    pub net_price: Decimal,
    pub currency: String,
}

impl From<ProductPricingRow> for ProductPricing {
    fn from(row: ProductPricingRow) -> Self {
        Self {
            list_price: row.list_price,
            discount: row.discount,
            net_price: row.net_price,
            currency: row.currency,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct ProductInventory {
    pub stock: i32,
    pub warehouse_location: Option<String>,
    pub reorder_level: i32,
}

impl From<ProductInventoryRow> for ProductInventory {
    fn from(row: ProductInventoryRow) -> Self {
        Self {
            stock: row.stock,
            warehouse_location: row.warehouse_location,
            reorder_level: row.reorder_level,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Product {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub supplier: Option<Supplier>,
    pub pricing: Option<ProductPricing>,
    pub inventory: Option<ProductInventory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductDetail> for Product {
    fn from(detail: ProductDetail) -> Self {
        let row = detail.product;
        Self {
            id: row.id.into(),
            name: row.name,
            description: row.description,
            category: row.category,
            brand: row.brand,
            sku: row.sku,
            supplier: detail.supplier.map(Supplier::from),
            pricing: detail.pricing.map(ProductPricing::from),
            inventory: detail.inventory.map(ProductInventory::from),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ── Argument bundles ──

/// Flat `createProduct` arguments.
#[derive(Debug, Clone)]
pub struct CreateProductArgs {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub supplier_id: Option<ID>,
    pub list_price: Decimal,
    pub discount: Option<Decimal>,
    pub currency: String,
    pub stock: i32,
    pub warehouse_location: Option<String>,
    pub reorder_level: Option<i32>,
}

/// Flat `updateProduct` arguments; every field may be omitted, and the
/// nullable product columns may also be cleared with an explicit `null`.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductArgs {
    pub name: Option<String>,
    pub description: MaybeUndefined<String>,
    pub category: MaybeUndefined<String>,
    pub brand: MaybeUndefined<String>,
    pub sku: MaybeUndefined<String>,
    pub supplier_id: MaybeUndefined<ID>,
    pub list_price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub currency: Option<String>,
    pub stock: Option<i32>,
    pub warehouse_location: Option<String>,
    pub reorder_level: Option<i32>,
}
