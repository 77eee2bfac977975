pub mod filter;
pub mod labels;
pub mod record;
