pub mod auth_client;
pub mod quotation_client;

pub use auth_client::*;
pub use quotation_client::*;
