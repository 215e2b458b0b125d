mod handler;
mod model;

pub use handler::{signin, signup};
pub use model::AuthRequest;
