pub mod price;
pub mod quote;
