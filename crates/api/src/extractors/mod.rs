//! Request extractors.

mod json_body;
mod path_param;

pub use json_body::JsonBody;
pub use path_param::PathParam;
