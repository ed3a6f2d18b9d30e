//! 产品目录

pub mod handler;
pub mod model;
pub mod service;
pub mod store;
