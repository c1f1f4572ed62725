//! Market data feeds

mod json_file;
mod static_feed;

pub use json_file::JsonFileFeeder;
pub use static_feed::StaticFeeder;
