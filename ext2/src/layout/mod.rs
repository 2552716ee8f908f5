//! # 磁盘数据结构层
//!
//! ext2 单块组镜像的布局：
//! 引导块 | 超级块 | 块组描述符表 | 块位图 | inode 位图 | inode 表 | 数据块
//!
//! 所有结构均为小端序，用 [`binrw`] 从已做过边界检查的切片上解码。

mod super_block;
pub use super_block::SuperBlock;

mod group_desc;
pub use group_desc::GroupDesc;

mod inode;
pub use inode::{DiskInode, ModeFlag};

mod dir_entry;
pub use dir_entry::{DirEntries, DirEntryHeader, RawDirEntry};

use binrw::BinRead;
use binrw::io::Cursor;

use crate::Malformed;

/// 从 `bytes` 起始处解码一个小端序结构。
///
/// `bytes` 由调用者按结构大小截取，所以解码失败只可能是切片过短。
pub(crate) fn decode<T>(bytes: &[u8], offset: usize) -> Result<T, Malformed>
where
    T: for<'a> BinRead<Args<'a> = ()>,
{
    T::read_le(&mut Cursor::new(bytes)).map_err(|_| Malformed::OutOfBounds {
        offset,
        len: bytes.len(),
    })
}
