pub mod projection;
pub mod sort;
