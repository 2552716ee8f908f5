use binrw::BinRead;

use crate::consts::{GOOD_OLD_INODE_SIZE, GOOD_OLD_REV, MAGIC, MAX_LOG_BLOCK_SIZE, MIN_BLOCK_SIZE};

/// 超级块：
/// - 提供文件系统合法性校验；
/// - 给出块大小，以此换算块编号与字节偏移；
/// - 给出 inode 总数与每组 inode 数。
///
/// 只解码到 `s_inode_size` 为止，其后的字段用不到。
#[derive(Debug, Clone, BinRead)]
#[br(little)]
pub struct SuperBlock {
    pub inodes_count: u32,
    pub blocks_count: u32,
    _r_blocks_count: u32,
    pub free_blocks_count: u32,
    pub free_inodes_count: u32,
    /// 超级块所在的块号：1 KiB 块为1，更大的块为0
    pub first_data_block: u32,
    log_block_size: u32,
    _log_frag_size: u32,
    pub blocks_per_group: u32,
    _frags_per_group: u32,
    pub inodes_per_group: u32,
    _mtime: u32,
    _wtime: u32,
    _mnt_count: u16,
    _max_mnt_count: u16,
    magic: u16,
    _state: u16,
    _errors: u16,
    _minor_rev_level: u16,
    _lastcheck: u32,
    _checkinterval: u32,
    _creator_os: u32,
    pub rev_level: u32,
    _def_resuid: u16,
    _def_resgid: u16,
    /* 以下字段仅在 dynamic revision 中有效 */
    pub first_ino: u32,
    inode_size: u16,
}

impl SuperBlock {
    /// 解码部分的字节数
    pub const SIZE: usize = 90;

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.magic == MAGIC
    }

    #[inline]
    pub fn magic(&self) -> u16 {
        self.magic
    }

    #[inline]
    pub fn log_block_size(&self) -> u32 {
        self.log_block_size
    }

    /// `1024 << s_log_block_size`，指数过大时为 `None`
    pub fn block_size(&self) -> Option<usize> {
        (self.log_block_size <= MAX_LOG_BLOCK_SIZE).then(|| MIN_BLOCK_SIZE << self.log_block_size)
    }

    /// inode 表中每条记录的跨度
    pub fn inode_size(&self) -> usize {
        if self.rev_level == GOOD_OLD_REV {
            GOOD_OLD_INODE_SIZE
        } else {
            self.inode_size as usize
        }
    }
}
