pub mod a001_customer;
pub mod a002_supplier;
pub mod a003_warehouse;
pub mod a004_category;
pub mod a005_unit;
