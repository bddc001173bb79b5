//! HTTP surface (axum routers, handlers, DTOs).

pub mod analysis;
