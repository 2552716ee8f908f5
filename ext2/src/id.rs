use derive_more::{Display, From, Into};

use crate::consts::ROOT_INO;

/// inode 编号，从1开始；0 保留，用作空目录项
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Display)]
#[repr(transparent)]
pub struct InodeId(u32);

impl InodeId {
    pub const ROOT: Self = Self(ROOT_INO);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// 以块大小为单位的块编号，0 号块从镜像起点开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Display)]
#[repr(transparent)]
pub struct BlockId(u32);

impl BlockId {
    /// 出现在 `i_block` 中时表示未分配（空洞）
    pub const HOLE: Self = Self(0);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<BlockId> for usize {
    fn from(id: BlockId) -> Self {
        id.0 as usize
    }
}

impl From<InodeId> for u64 {
    fn from(id: InodeId) -> Self {
        id.0 as u64
    }
}
