/// 用户会话缓存键前缀
const USER_PREFIX: &str = "user";

/// 生成用户资料缓存键，例如 `user42`
pub fn user_key(user_id: i32) -> String {
    format!("{}{}", USER_PREFIX, user_id)
}
