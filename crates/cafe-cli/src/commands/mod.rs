pub mod customer;
pub mod dispatch;
pub mod employee;
pub mod ingredient;
pub mod line;
pub mod log;
pub mod menu;
pub mod order;
pub mod recipe;
pub mod report;
pub mod shared;
pub mod supplier;
