mod handler;
mod model;

pub use handler::{edit_user, get_me};
pub use model::EditUserRequest;
