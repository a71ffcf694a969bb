pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod response;
pub mod save;
pub mod validation;

pub use delete::delete_user;
pub use get::get_user;
pub use health::health_check;
pub use list::{list_filtered_users, list_users};
pub use response::ApiResponse;
pub use save::save_user;
