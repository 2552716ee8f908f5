//! ext2 磁盘布局常量

/// 主超级块相对镜像起点的字节偏移
pub const SUPERBLOCK_OFFSET: usize = 1024;
/// 超级块所占字节数
pub const SUPERBLOCK_SIZE: usize = 1024;

pub const MAGIC: u16 = 0xEF53;

/// 根目录的 inode 编号
pub const ROOT_INO: u32 = 2;

/// 只支持单个块组，所有 inode 都从这个块组的 inode 表中取
pub const PRIMARY_GROUP: u32 = 0;

/// 块大小为 `1024 << s_log_block_size`
pub const MIN_BLOCK_SIZE: usize = 1024;
/// 最大块为 64 KiB
pub const MAX_LOG_BLOCK_SIZE: u32 = 6;

/// revision 0 的 inode 大小；dynamic revision 以超级块的 `s_inode_size` 为准
pub const GOOD_OLD_INODE_SIZE: usize = 128;
pub const GOOD_OLD_REV: u32 = 0;

pub const GROUP_DESC_SIZE: usize = 32;

/// inode(4) + rec_len(2) + name_len(1) + file_type(1)
pub const DIR_ENTRY_HEADER_SIZE: usize = 8;

/// `i_block` 中直接索引的数量，其后依次为一级、二级、三级间接索引
pub const DIRECT_COUNT: usize = 12;
pub const BLOCK_POINTERS: usize = 15;

/// `i_blocks` 的计数单位
pub const SECTOR_SIZE: u64 = 512;
