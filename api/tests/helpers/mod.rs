pub mod app;

pub use app::{json_post, make_test_app};
