use alloc::{collections::VecDeque, vec::Vec};

use crate::error::{FsError, FsResult};

/// 空闲块池。块号只是符号化的下标，块与块之间没有物理邻接关系，
/// 所以回收时直接追加到队尾即可，不做合并也不排序，
/// 复用顺序就是池内顺序。
pub struct BlockAllocator {
    /// 尚未分配的块序号，初始为 0..total 升序
    free: VecDeque<usize>,
}

impl BlockAllocator {
    pub fn new(total_blocks: usize) -> Self {
        Self {
            free: (0..total_blocks).collect(),
        }
    }

    /// 按池中当前顺序取出前 n 个块。
    /// 空闲块不足时整体失败，池保持原样，不做部分分配。
    pub fn alloc(&mut self, n: usize) -> FsResult<Vec<usize>> {
        if n > self.free.len() {
            return Err(FsError::OutOfSpace);
        }
        Ok(self.free.drain(..n).collect())
    }

    /// 归还一批块，追加到池尾
    pub fn dealloc(&mut self, blocks: &[usize]) {
        for &block in blocks {
            debug_assert!(!self.free.contains(&block));
            self.free.push_back(block);
        }
    }

    /// 池中剩余的空闲块数
    pub fn available(&self) -> usize {
        self.free.len()
    }
}
