mod thread_handler;

pub use thread_handler::*;
