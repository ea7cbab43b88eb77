pub mod document;
pub mod error;
pub mod renban;
pub mod self_test;
