/// 书签集合缓存键前缀
const BOOKMARKS_PREFIX: &str = "bookmarks";

/// 生成用户书签集合缓存键，例如 `bookmarks42`
pub fn bookmarks_key(user_id: i32) -> String {
    format!("{}{}", BOOKMARKS_PREFIX, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_prefix_followed_by_user_id() {
        assert_eq!(bookmarks_key(1), "bookmarks1");
        assert_eq!(bookmarks_key(42), "bookmarks42");
    }
}
