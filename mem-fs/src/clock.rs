/// 时间源接口。引擎自身不接触操作系统时钟，由使用者在构建时注入实现，
/// inode 的创建时刻都取自这里。
pub trait Clock: Send + Sync {
    /// 当前 Unix 时间戳（秒）
    fn now(&self) -> u64;
}
