//! Splits flat product mutation arguments into the nested writes the
//! repository expects.
//!
//! Presence is explicit: an argument that was omitted is `None`, while a
//! supplied zero is `Some(0)`. Pricing is rewritten whenever `listPrice` is
//! supplied and inventory whenever `stock` is supplied, zero included.
//! Nullable product columns carry three states: omitted keeps the stored
//! value, `null` clears it, a value replaces it.

use async_graphql::{MaybeUndefined, ID};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use infra::repos::{
    CreateProduct, InventoryWrite, NewProduct, PricingWrite, ProductFields, UpdateProduct,
};

use super::types::{CreateProductArgs, UpdateProductArgs};

#[derive(Debug, Error)]
pub enum RemapError {
    #[error("Invalid ID: {0}")]
    InvalidId(String),
}

pub fn parse_id(id: &ID) -> Result<i64, RemapError> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| RemapError::InvalidId(id.to_string()))
}

fn parse_optional_id(id: Option<&ID>) -> Result<Option<i64>, RemapError> {
    id.map(parse_id).transpose()
}

fn presence<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

/// Scale of the `NUMERIC(12, 2)` price columns.
const PRICE_SCALE: u32 = 2;

/// Round to the stored scale the same way Postgres `numeric` does (half away from zero).
pub fn to_price_scale(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `listPrice - discount`, with an omitted discount counting as zero.
/// Both operands are rounded to the stored scale first so the three stored
/// columns agree exactly.
pub fn net_price(list_price: Decimal, discount: Option<Decimal>) -> Decimal {
    to_price_scale(list_price) - to_price_scale(discount.unwrap_or(Decimal::ZERO))
}

pub fn pricing_write(
    list_price: Decimal,
    discount: Option<Decimal>,
    currency: Option<String>,
) -> PricingWrite {
    PricingWrite {
        list_price: to_price_scale(list_price),
        discount: to_price_scale(discount.unwrap_or(Decimal::ZERO)),
        net_price: net_price(list_price, discount),
        currency,
    }
}

pub fn for_create(args: CreateProductArgs) -> Result<CreateProduct, RemapError> {
    let supplier_id = parse_optional_id(args.supplier_id.as_ref())?;

    Ok(CreateProduct {
        product: NewProduct {
            name: args.name,
            description: args.description,
            category: args.category,
            brand: args.brand,
            sku: args.sku,
            supplier_id,
        },
        pricing: pricing_write(args.list_price, args.discount, Some(args.currency)),
        inventory: InventoryWrite {
            stock: args.stock,
            warehouse_location: args.warehouse_location,
            reorder_level: args.reorder_level,
        },
    })
}

pub fn for_update(args: UpdateProductArgs) -> Result<UpdateProduct, RemapError> {
    let supplier_id = presence(args.supplier_id)
        .map(|id| parse_optional_id(id.as_ref()))
        .transpose()?;

    let pricing = args
        .list_price
        .map(|list_price| pricing_write(list_price, args.discount, args.currency));

    let inventory = args.stock.map(|stock| InventoryWrite {
        stock,
        warehouse_location: args.warehouse_location,
        reorder_level: args.reorder_level,
    });

    Ok(UpdateProduct {
        product: ProductFields {
            name: args.name,
            description: presence(args.description),
            category: presence(args.category),
            brand: presence(args.brand),
            sku: presence(args.sku),
            supplier_id,
        },
        pricing,
        inventory,
    })
}
