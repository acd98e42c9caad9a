pub mod quote_source;

#[cfg(test)]
pub mod scripted_source;
