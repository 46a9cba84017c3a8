//! Shared response types.

mod response;

pub use response::{status_name, ResponseInfo};
