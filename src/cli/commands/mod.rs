pub mod records;
pub mod views;

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;
