//! Messages posted into a thread.
//!
//! Every message belongs to exactly one thread and carries an ordered,
//! possibly empty, list of image references.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/messages?thread_id=<int>` | List a thread's messages, newest first |
//! | POST | `/messages/create` | Post a message into a thread |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MessageService;
