//! # Tasker Server
//!
//! REST boundary of the task management API, built on Rocket.
//!
//! ## Routes
//!
//! | Method | Path | Access |
//! |--------|------|--------|
//! | POST | `/register` | public |
//! | POST | `/login` | public |
//! | GET | `/health` | public |
//! | GET | `/tasks`, `/tasks/<id>` | any authenticated user |
//! | POST | `/tasks` | admin |
//! | PUT, DELETE | `/tasks/<id>` | admin |
//! | POST | `/promote` | admin |
//!
//! Protected routes expect `Authorization: Bearer <token>`. Every error
//! body has the shape `{"message": "..."}`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tasker_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run(None).await
//! }
//! ```

pub mod auth;
pub mod catchers;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod init;
pub mod models;
pub mod routes;

pub use init::run;
pub use routes::build_rocket;
