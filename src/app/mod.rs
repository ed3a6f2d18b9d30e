//! 应用层：路由与各业务模块

pub mod product;

use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer};

use crate::core::{error::panic_response, middleware::request_logging_middleware};
use product::handler::{self, AppState};

/// 组装完整路由，`main` 与集成测试共用
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route(
            "/api/products",
            post(handler::create_product).get(handler::get_product),
        )
        .route("/api/products/error", get(handler::trigger_generic_error))
        .fallback(handler::fallback);

    with_middleware(routes, request_timeout).with_state(state)
}

/// 日志、超时与 panic 捕获中间件栈
fn with_middleware(routes: Router<AppState>, request_timeout: Duration) -> Router<AppState> {
    routes.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TimeoutLayer::new(request_timeout))
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}
