//! 磁盘上的 inode 记录
//!
//! `i_block` 共15项：前12项为直接索引，其后依次为一级、二级、三级间接索引。
//! 目录只用到 `i_block[0]`，即只支持单块目录。

use binrw::BinRead;
use enumflags2::{BitFlags, bitflags};
use vfs::DirEntryType;

use crate::BlockId;
use crate::consts::{BLOCK_POINTERS, GOOD_OLD_INODE_SIZE};

/// `i_mode` 的高4位为文件类型
const S_IFMT: u16 = 0o170000;
const S_IFSOCK: u16 = 0o140000;
const S_IFLNK: u16 = 0o120000;
const S_IFREG: u16 = 0o100000;
const S_IFBLK: u16 = 0o060000;
const S_IFDIR: u16 = 0o040000;
const S_IFCHR: u16 = 0o020000;
const S_IFIFO: u16 = 0o010000;

#[derive(Debug, Clone, BinRead)]
#[br(little)]
pub struct DiskInode {
    /// 类型与权限
    pub mode: u16,
    pub uid: u16,
    /// 文件大小的低32位
    size: u32,
    pub atime: u32,
    pub ctime: u32,
    pub mtime: u32,
    pub dtime: u32,
    pub gid: u16,
    /// 硬链接个数
    pub links_count: u16,
    /// 占用的512字节扇区数
    pub blocks: u32,
    pub flags: u32,
    _osd1: u32,
    block: [u32; BLOCK_POINTERS],
    pub generation: u32,
    pub file_acl: u32,
    /// 普通文件：文件大小的高32位（large_file 特性）
    size_high: u32,
    _faddr: u32,
    _osd2: [u8; 12],
}

impl DiskInode {
    /// 解码部分恒为 revision 0 的128字节，多出的部分为扩展字段
    pub const SIZE: usize = GOOD_OLD_INODE_SIZE;

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.mode & S_IFMT == S_IFDIR
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.mode & S_IFMT == S_IFREG
    }

    /// 文件类型；未使用的 inode（mode 为0）或无法识别时为 `None`
    pub fn kind(&self) -> Option<DirEntryType> {
        let kind = match self.mode & S_IFMT {
            S_IFSOCK => DirEntryType::Socket,
            S_IFLNK => DirEntryType::SymLink,
            S_IFREG => DirEntryType::Regular,
            S_IFBLK => DirEntryType::Block,
            S_IFDIR => DirEntryType::Directory,
            S_IFCHR => DirEntryType::Char,
            S_IFIFO => DirEntryType::Fifo,
            _ => return None,
        };
        Some(kind)
    }

    #[inline]
    pub fn permissions(&self) -> BitFlags<ModeFlag> {
        BitFlags::from_bits_truncate(self.mode)
    }

    pub fn size(&self) -> u64 {
        if self.is_file() {
            ((self.size_high as u64) << 32) | self.size as u64
        } else {
            self.size as u64
        }
    }

    /// 第 `index` 个块指针，越界时视作空洞
    #[inline]
    pub fn block(&self, index: usize) -> BlockId {
        self.block
            .get(index)
            .copied()
            .map_or(BlockId::HOLE, BlockId::new)
    }
}

/// `i_mode` 的低12位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[bitflags]
#[repr(u16)]
pub enum ModeFlag {
    OtherExec = 0o0001,
    OtherWrite = 0o0002,
    OtherRead = 0o0004,
    GroupExec = 0o0010,
    GroupWrite = 0o0020,
    GroupRead = 0o0040,
    UserExec = 0o0100,
    UserWrite = 0o0200,
    UserRead = 0o0400,
    Sticky = 0o1000,
    SetGid = 0o2000,
    SetUid = 0o4000,
}
