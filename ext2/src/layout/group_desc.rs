use binrw::BinRead;

use crate::BlockId;
use crate::consts::GROUP_DESC_SIZE;

/// 块组描述符，位于超级块所在块的下一块
#[derive(Debug, Clone, BinRead)]
#[br(little)]
pub struct GroupDesc {
    pub block_bitmap: u32,
    pub inode_bitmap: u32,
    /// inode 表的起始块号
    inode_table: u32,
    pub free_blocks_count: u16,
    pub free_inodes_count: u16,
    pub used_dirs_count: u16,
    _pad: u16,
    _reserved: [u32; 3],
}

impl GroupDesc {
    pub const SIZE: usize = GROUP_DESC_SIZE;

    #[inline]
    pub fn inode_table(&self) -> BlockId {
        BlockId::new(self.inode_table)
    }
}
