pub mod attributes;
pub mod pricing;
pub mod region;
