//! mem-fs: 完全驻留进程内存的块式模拟文件系统。
//! 一段定长的字节数组按固定块大小划分为若干块，文件由 inode 记录其占用的块列表，
//! 并挂载在以根目录为起点的层级命名空间之下。
//! 本 crate 只实现存储引擎本身，交互式解释器等使用方以公开接口接入。
#![no_std]

extern crate alloc;

mod allocator;
mod clock;
mod dir;
mod error;
mod fs;
mod inode;
mod resolver;

pub use allocator::BlockAllocator;
pub use clock::Clock;
pub use dir::{DirId, DirTable};
pub use error::{FsError, FsResult};
pub use fs::{DirListing, FsStats, MemFileSystem};
pub use inode::Inode;
