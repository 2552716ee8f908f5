//! # 原始布局访问层
//!
//! 在只读的镜像字节上定位超级块、块、块组描述符与 inode。
//! 镜像被视为一块以字节偏移寻址的区域，所有 `(offset, len)` 都先对照镜像大小检查，再切片。

use crate::consts::{GOOD_OLD_INODE_SIZE, PRIMARY_GROUP, SUPERBLOCK_OFFSET, SUPERBLOCK_SIZE};
use crate::layout::{DiskInode, GroupDesc, SuperBlock, decode};
use crate::{BlockId, Error, InodeId, Malformed, Unsupported};

/// 借用的 ext2 镜像。
///
/// 超级块在 [`Ext2Image::open`] 时解码并校验一次，块大小与 inode 跨度随之确定，
/// 在镜像的生命周期内不变。
#[derive(Debug, Clone)]
pub struct Ext2Image<'a> {
    bytes: &'a [u8],
    super_block: SuperBlock,
    block_size: usize,
    inode_size: usize,
}

impl<'a> Ext2Image<'a> {
    pub fn open(bytes: &'a [u8]) -> Result<Self, Error> {
        let Some(raw) = bytes.get(SUPERBLOCK_OFFSET..SUPERBLOCK_OFFSET + SUPERBLOCK_SIZE) else {
            log::warn!("Image of {} bytes has no room for a superblock", bytes.len());
            return Err(Malformed::TooSmall { len: bytes.len() }.into());
        };
        let super_block: SuperBlock = decode(raw, SUPERBLOCK_OFFSET)?;

        if !super_block.is_valid() {
            log::warn!("Bad superblock magic: {:#06x}", super_block.magic());
            return Err(Malformed::BadMagic(super_block.magic()).into());
        }

        let Some(block_size) = super_block.block_size() else {
            log::warn!("Bad log block size: {}", super_block.log_block_size());
            return Err(Malformed::BlockSize(super_block.log_block_size()).into());
        };

        let inode_size = super_block.inode_size();
        if inode_size < GOOD_OLD_INODE_SIZE || inode_size > block_size {
            log::warn!("Inode size {inode_size} doesn't fit block size {block_size}");
            return Err(Malformed::InodeSize(inode_size).into());
        }

        if super_block.inodes_per_group == 0 {
            log::warn!("Superblock declares no inodes per group");
            return Err(Malformed::InodesPerGroup.into());
        }

        log::debug!(
            "ext2 image: {} bytes, block_size={block_size}, inode_size={inode_size}, inodes={}",
            bytes.len(),
            super_block.inodes_count
        );

        Ok(Self {
            bytes,
            super_block,
            block_size,
            inode_size,
        })
    }

    #[inline]
    pub fn super_block(&self) -> &SuperBlock {
        &self.super_block
    }

    #[inline]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// inode 表中相邻两条记录的距离
    #[inline]
    pub const fn inode_size(&self) -> usize {
        self.inode_size
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// 块编号所指的整块，`block(0)` 从镜像起点开始
    pub fn block(&self, id: BlockId) -> Result<&'a [u8], Error> {
        let offset = self.block_offset(id)?;
        self.slice(offset, self.block_size)
    }

    /// 第 `group` 个块组描述符。
    ///
    /// 描述符表紧跟在超级块所在块之后；只有 [`PRIMARY_GROUP`] 受支持。
    pub fn group_desc(&self, group: u32) -> Result<GroupDesc, Error> {
        if group != PRIMARY_GROUP {
            return Err(Unsupported::BlockGroup(group).into());
        }

        let table = BlockId::new((SUPERBLOCK_OFFSET / self.block_size + 1) as u32);
        let offset = self.block_offset(table)?;
        let raw = self.slice(offset, GroupDesc::SIZE)?;
        Ok(decode(raw, offset)?)
    }

    /// 编号为 `ino` 的 inode 记录，编号从1开始
    pub fn inode(&self, ino: InodeId) -> Result<DiskInode, Error> {
        let offset = self.inode_offset(ino)?;
        let raw = self.slice(offset, DiskInode::SIZE)?;
        Ok(decode(raw, offset)?)
    }
}

impl<'a> Ext2Image<'a> {
    fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], Error> {
        offset
            .checked_add(len)
            .and_then(|end| self.bytes.get(offset..end))
            .ok_or(Malformed::OutOfBounds { offset, len }.into())
    }

    fn block_offset(&self, id: BlockId) -> Result<usize, Error> {
        usize::from(id)
            .checked_mul(self.block_size)
            .ok_or(Malformed::OutOfBounds {
                offset: usize::MAX,
                len: self.block_size,
            }
            .into())
    }

    /// `inode_table + (ino - 1) * inode_size`
    fn inode_offset(&self, ino: InodeId) -> Result<usize, Error> {
        let raw = ino.get();
        if raw == 0 || raw > self.super_block.inodes_count {
            return Err(Malformed::InodeOutOfRange(raw).into());
        }

        let index = raw - 1;
        let per_group = self.super_block.inodes_per_group;
        if index >= per_group {
            return Err(Unsupported::BlockGroup(index / per_group).into());
        }

        let table = self.block_offset(self.group_desc(PRIMARY_GROUP)?.inode_table())?;
        (index as usize)
            .checked_mul(self.inode_size)
            .and_then(|rel| table.checked_add(rel))
            .ok_or(Malformed::OutOfBounds {
                offset: table,
                len: self.inode_size,
            }
            .into())
    }
}
