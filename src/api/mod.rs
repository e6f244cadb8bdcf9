//! API Module
//!
//! HTTP handlers and routing for the recommendation REST API.
//!
//! # Endpoints
//! - `GET /recommendations/` - Per-user recommendations, served through the cache
//! - `GET /recommendations/mood/` - Mood-based recommendations
//! - `GET /moods`, `GET /platforms`, `GET /system/info` - Catalog information
//! - `GET /cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
