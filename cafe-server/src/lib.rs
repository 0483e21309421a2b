//! Cafe Server - QR dine-in ordering backend
//!
//! # Architecture
//!
//! - **Table Registry** (`api/tables`, `services/qr`): table lifecycle and
//!   the QR payload/image binding
//! - **Order Store** (`db/repository/order`): persistence with the per-order
//!   compare-and-swap used to serialize competing status writers
//! - **Order Service** (`services/order_service`): validation, server-side
//!   price snapshots, transition guard
//! - **HTTP API** (`api`): axum routers, one module per resource
//!
//! # Module structure
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # order service, QR collaborator
//! ├── db/            # pool, migrations, repositories
//! └── utils/         # logger, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
