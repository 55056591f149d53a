use alloc::{string::String, sync::Arc, vec::Vec};

use crate::{
    allocator::BlockAllocator,
    clock::Clock,
    dir::DirTable,
    error::{FsError, FsResult},
    inode::Inode,
};

/// 文件系统的聚合统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsStats {
    /// 现存文件数
    pub file_count: usize,
    /// 总容量（字节），即整段内存的长度
    pub total_space: usize,
    /// 可用空间：空闲块数乘以块大小
    pub available_space: usize,
    /// 已占用空间：总容量减去可用空间
    pub occupied_space: usize,
}

/// 某个目录的直接子项清单（非递归），名字按字典序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub files: Vec<String>,
    pub directories: Vec<String>,
}

/// 存储引擎门面：在一段定长内存上组合空闲块池、inode 与目录树，
/// 对外提供按路径的文件生命周期操作。
/// 单个文件的状态机为 缺失 -> 空文件 -> 有内容 -> 缺失，
/// 全程由各操作同步推进，任一时刻每个块至多属于一个 inode。
pub struct MemFileSystem {
    /// 平坦内存区，按 block_size 划分为定长块
    memory: Vec<u8>,
    /// 块大小（字节）
    block_size: usize,
    /// 空闲块池
    allocator: BlockAllocator,
    /// 目录树，根目录由引擎持有
    dirs: DirTable,
    /// 现存文件计数
    file_count: usize,
    /// 注入的时间源，为 inode 提供创建时刻
    clock: Arc<dyn Clock>,
}

impl MemFileSystem {
    /// 以总容量与块大小构建空的文件系统。
    /// 可用块数为 total_bytes / block_size 向下取整，除不尽的尾部字节不参与分配
    pub fn new(total_bytes: usize, block_size: usize, clock: Arc<dyn Clock>) -> Self {
        assert!(block_size > 0);
        let mut memory = Vec::new();
        memory.resize(total_bytes, 0u8);
        Self {
            memory,
            block_size,
            allocator: BlockAllocator::new(total_bytes / block_size),
            dirs: DirTable::new(),
            file_count: 0,
            clock,
        }
    }

    /// 在 path 处登记一个零块、零长度的空文件
    pub fn create_file(&mut self, path: &str) -> FsResult<()> {
        let (dir, name) = self.dirs.resolve_containing(path)?;
        if self.dirs.get_file(dir, &name).is_some() {
            return Err(FsError::FileAlreadyExists);
        }
        let inode = Inode::new(Vec::new(), 0, self.clock.now());
        self.dirs.add_file(dir, &name, inode);
        self.file_count += 1;
        Ok(())
    }

    /// 逐段补建 path 上缺失的目录，已存在的部分原样复用
    pub fn create_dir(&mut self, path: &str) {
        self.dirs.create_path(path);
    }

    /// 把 content 整体写入 path 处的文件，文件不存在时等价于先创建再写入。
    /// 写入是分步提交的：先分配并填充新块，成功后才释放旧块并成对替换
    /// inode 的块列表与长度，因此分配失败（OutOfSpace）不会破坏原有数据。
    /// 代价是覆盖写入瞬时需要新旧两份块同时在账
    pub fn write_file(&mut self, path: &str, content: &[u8]) -> FsResult<()> {
        let (dir, name) = self.dirs.resolve_containing(path)?;
        let needed = (content.len() + self.block_size - 1) / self.block_size;
        let new_blocks = self.allocator.alloc(needed)?;
        for (chunk, &block) in content.chunks(self.block_size).zip(new_blocks.iter()) {
            let base = block * self.block_size;
            self.memory[base..base + chunk.len()].copy_from_slice(chunk);
        }
        if let Some(inode) = self.dirs.get_file_mut(dir, &name) {
            let old_blocks = inode.blocks().to_vec();
            inode.set_blocks(new_blocks, content.len());
            self.allocator.dealloc(&old_blocks);
        } else {
            let inode = Inode::new(new_blocks, content.len(), self.clock.now());
            self.dirs.add_file(dir, &name, inode);
            self.file_count += 1;
        }
        Ok(())
    }

    /// 按 inode 存储的长度精确读出文件内容：
    /// 沿块列表顺序逐块拷贝，最后一块只取剩余的字节数
    pub fn read_file(&self, path: &str) -> FsResult<Vec<u8>> {
        let (dir, name) = self.dirs.resolve_containing(path)?;
        let inode = self
            .dirs
            .get_file(dir, &name)
            .ok_or(FsError::FileDoesNotExist)?;
        let mut content = Vec::with_capacity(inode.size());
        for &block in inode.blocks() {
            let base = block * self.block_size;
            let take = (inode.size() - content.len()).min(self.block_size);
            content.extend_from_slice(&self.memory[base..base + take]);
        }
        Ok(content)
    }

    /// 摘除目录项，把 inode 的块归还空闲池
    pub fn delete_file(&mut self, path: &str) -> FsResult<()> {
        let (dir, name) = self.dirs.resolve_containing(path)?;
        let inode = self
            .dirs
            .delete_file(dir, &name)
            .ok_or(FsError::FileDoesNotExist)?;
        self.allocator.dealloc(inode.blocks());
        self.file_count -= 1;
        Ok(())
    }

    /// 读出 source 全文，在 destination 处创建并写入。
    /// 三步组合并非单个原子操作，写入失败时撤销刚创建的空目标项，
    /// 让失败的复制不在目标目录留下任何痕迹
    pub fn copy_file(&mut self, source: &str, destination: &str) -> FsResult<()> {
        let content = self.read_file(source)?;
        self.create_file(destination)?;
        if let Err(err) = self.write_file(destination, &content) {
            let _ = self.delete_file(destination);
            return Err(err);
        }
        Ok(())
    }

    /// path 处目录的直接子项，非递归
    pub fn list(&self, path: &str) -> FsResult<DirListing> {
        let dir = self.dirs.resolve_dir(path)?;
        Ok(DirListing {
            files: self.dirs.file_names(dir),
            directories: self.dirs.subdir_names(dir),
        })
    }

    pub fn stats(&self) -> FsStats {
        let total_space = self.memory.len();
        let available_space = self.allocator.available() * self.block_size;
        FsStats {
            file_count: self.file_count,
            total_space,
            available_space,
            occupied_space: total_space - available_space,
        }
    }
}
