mod thread_dto;

pub use thread_dto::*;
