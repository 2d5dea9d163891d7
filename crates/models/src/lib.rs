pub mod errors;
pub mod db;
pub mod menu_item;
pub mod order;
pub mod order_item;

#[cfg(test)]
mod tests;
