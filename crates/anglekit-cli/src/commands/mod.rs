pub mod compile;
pub mod schemas;
