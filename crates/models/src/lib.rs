pub mod errors;
pub mod db;
pub mod validation;
pub mod plot;
pub mod booking;

#[cfg(test)]
mod tests;
