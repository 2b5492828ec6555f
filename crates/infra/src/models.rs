use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub supplier_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ProductPricingRow {
    pub id: i64,
    pub product_id: i64,
    pub list_price: Decimal,
    pub discount: Decimal,
    pub net_price: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ProductInventoryRow {
    pub id: i64,
    pub product_id: i64,
    pub stock: i32,
    pub warehouse_location: Option<String>,
    pub reorder_level: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SupplierRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SupplierContactRow {
    pub id: i64,
    pub supplier_id: i64,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A supplier together with its (optional) contact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierDetail {
    pub supplier: SupplierRow,
    pub contact: Option<SupplierContactRow>,
}

/// The fixed eager-loaded shape every product read returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: ProductRow,
    pub pricing: Option<ProductPricingRow>,
    pub inventory: Option<ProductInventoryRow>,
    pub supplier: Option<SupplierDetail>,
}

/// Flat result of the product/pricing/inventory/supplier/contact join.
///
/// Every column from a LEFT JOINed table is nullable here; the presence of
/// the joined table's primary key decides whether the nested record exists.
#[derive(Debug, Clone, FromRow)]
pub struct ProductDetailRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub supplier_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub pricing_id: Option<i64>,
    pub list_price: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub net_price: Option<Decimal>,
    pub currency: Option<String>,

    pub inventory_id: Option<i64>,
    pub stock: Option<i32>,
    pub warehouse_location: Option<String>,
    pub reorder_level: Option<i32>,

    pub supplier_name: Option<String>,
    pub supplier_created_at: Option<DateTime<Utc>>,
    pub supplier_updated_at: Option<DateTime<Utc>>,

    pub contact_id: Option<i64>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
}

impl From<ProductDetailRow> for ProductDetail {
    fn from(row: ProductDetailRow) -> Self {
        let pricing = match (
            row.pricing_id,
            row.list_price,
            row.discount,
            row.net_price,
            row.currency,
        ) {
            (Some(id), Some(list_price), Some(discount), Some(net_price), Some(currency)) => {
                Some(ProductPricingRow {
                    id,
                    product_id: row.id,
                    list_price,
                    discount,
                    net_price,
                    currency,
                })
            }
            _ => None,
        };

        let inventory = match (row.inventory_id, row.stock) {
            (Some(id), Some(stock)) => Some(ProductInventoryRow {
                id,
                product_id: row.id,
                stock,
                warehouse_location: row.warehouse_location,
                reorder_level: row.reorder_level.unwrap_or_default(),
            }),
            _ => None,
        };

        let supplier = match (
            row.supplier_id,
            row.supplier_name,
            row.supplier_created_at,
            row.supplier_updated_at,
        ) {
            (Some(supplier_id), Some(name), Some(created_at), Some(updated_at)) => {
                let contact = row.contact_id.map(|id| SupplierContactRow {
                    id,
                    supplier_id,
                    contact_name: row.contact_name,
                    email: row.contact_email,
                    phone: row.contact_phone,
                    address: row.contact_address,
                });

                Some(SupplierDetail {
                    supplier: SupplierRow {
                        id: supplier_id,
                        name,
                        created_at,
                        updated_at,
                    },
                    contact,
                })
            }
            _ => None,
        };

        Self {
            product: ProductRow {
                id: row.id,
                name: row.name,
                description: row.description,
                category: row.category,
                brand: row.brand,
                sku: row.sku,
                supplier_id: row.supplier_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            pricing,
            inventory,
            supplier,
        }
    }
}
