pub mod cache;
pub mod mortality;
pub mod table_export;
