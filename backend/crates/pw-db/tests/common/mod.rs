#![allow(dead_code)]

mod test_db;

pub use test_db::{create_file_pool, create_test_pool};
