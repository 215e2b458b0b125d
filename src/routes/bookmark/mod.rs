mod handler;
mod model;

pub use handler::{
    create_bookmark, delete_bookmark_by_id, edit_bookmark_by_id, get_bookmark_by_id,
    get_bookmarks,
};
pub use model::{CreateBookmarkRequest, EditBookmarkRequest};
