pub mod hero;
pub mod hidden_link;
pub mod stores;
