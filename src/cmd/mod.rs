pub mod costs;
pub mod quote;
