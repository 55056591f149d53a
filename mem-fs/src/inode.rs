use alloc::vec::Vec;

/// 文件的元数据记录：正在支撑文件内容的块序号列表与逻辑字节长度。
/// 一个 inode 在任一时刻只被一个目录项持有，并且不回指所在目录。
pub struct Inode {
    /// 按内容逻辑顺序排列的块序号
    blocks: Vec<usize>,
    /// 文件内容的字节数，恒不超过 blocks.len() * 块大小
    size: usize,
    /// 创建时刻（Unix 秒），覆盖写入时保持不变
    created_at: u64,
}

impl Inode {
    pub fn new(blocks: Vec<usize>, size: usize, created_at: u64) -> Self {
        Self {
            blocks,
            size,
            created_at,
        }
    }

    /// 当前块列表的只读视图。调用方不能假定它反映之后的分配情况
    pub fn blocks(&self) -> &[usize] {
        &self.blocks
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// 同时替换块列表与长度。两个字段只能这样成对更新，
    /// 不提供增量扩容或缩容的接口
    pub fn set_blocks(&mut self, blocks: Vec<usize>, size: usize) {
        self.blocks = blocks;
        self.size = size;
    }
}
