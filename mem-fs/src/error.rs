use alloc::string::String;
use core::fmt;

/// 文件系统操作的统一 Result 别名
pub type FsResult<T> = Result<T, FsError>;

/// 存储引擎对外的四类错误。
/// 错误在检测到违规的那个操作内同步返回，引擎内部不重试也不吞掉，
/// 捕获、上报与继续运行都是外层解释器的职责。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// 创建目标时同名文件已存在
    FileAlreadyExists,
    /// 读取或删除的目标文件不存在
    FileDoesNotExist,
    /// 路径中某一段目录不存在，携带缺失的目录名
    DirectoryNotFound(String),
    /// 空闲块不足以满足本次分配
    OutOfSpace,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::FileAlreadyExists => write!(f, "file already exists"),
            FsError::FileDoesNotExist => write!(f, "file does not exist"),
            FsError::DirectoryNotFound(name) => write!(f, "directory \"{}\" not found", name),
            FsError::OutOfSpace => write!(f, "out of space"),
        }
    }
}
