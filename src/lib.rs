//! # 产品目录服务
//!
//! 基于 Axum 的最小产品目录 HTTP 服务：
//! - `app`：路由、处理器、业务服务与内存存储
//! - `core`：统一错误处理与请求日志中间件
//! - `infrastructure`：配置与日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::create_router;
pub use app::product::handler::AppState;
pub use app::product::service::{CatalogService, ProductService};
pub use app::product::store::ProductStore;
