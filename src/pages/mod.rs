pub mod account;
pub mod dashboard;
pub mod device;
pub mod device_detail;
pub mod func_model;
pub mod login;
pub mod product;
pub mod product_detail;
