pub mod products;

pub use products::{
    CreateProduct, InventoryWrite, NewProduct, PricingWrite, ProductFields, UpdateProduct,
};
