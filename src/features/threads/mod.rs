//! Discussion threads.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/threads` | List all threads, newest first |
//! | POST | `/threads/create` | Create a thread |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ThreadService;
