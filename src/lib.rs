pub mod config;
pub mod pages;
pub mod payment;
pub mod utils;
