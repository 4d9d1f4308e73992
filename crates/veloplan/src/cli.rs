pub mod parse;
pub mod plan;
pub mod smooth;
