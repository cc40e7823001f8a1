pub mod common;

pub mod a001_location;
pub mod a002_product;
pub mod a003_supplier;
pub mod a004_customer;
pub mod a005_purchase_invoice;
pub mod a006_cash_account;
pub mod a007_cash_transaction;
pub mod a008_lost_sale;
pub mod a009_order;
pub mod a010_shift;
