pub mod output;
pub mod scenario;
