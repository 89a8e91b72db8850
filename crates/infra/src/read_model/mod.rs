//! Sales read model: catalog products and sales transactions.

pub mod records;
pub mod sales_store;

pub use records::{OrderLine, OrderStatus, OrderType, ProductRecord, SalesOrder};
pub use sales_store::{InMemorySalesStore, SeedData};
