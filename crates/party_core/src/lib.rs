pub mod catalog;
pub mod code_block;
pub mod codes;
pub mod core_api;
pub mod hex;
