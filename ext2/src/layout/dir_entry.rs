//! 目录块由变长目录项首尾相接构成：
//!
//! inode | rec_len | name_len | file_type | name...
//!
//! `rec_len` 是到下一项的字节距离，最后一项的 `rec_len` 延伸至块尾。
//! 被删除的项 inode 为0，但 `rec_len` 依旧有效。

use binrw::BinRead;

use vfs::DirEntryType;

use crate::InodeId;
use crate::Malformed;
use crate::consts::DIR_ENTRY_HEADER_SIZE;
use crate::layout::decode;

#[derive(Debug, Clone, BinRead)]
#[br(little)]
pub struct DirEntryHeader {
    pub inode: u32,
    pub rec_len: u16,
    /// 旧版本的 `name_len` 为16位，高字节恒为0，这里只取低字节
    pub name_len: u8,
    /// 仅在 filetype 特性下有意义，路径解析不采用
    pub file_type: u8,
}

impl DirEntryHeader {
    pub const SIZE: usize = DIR_ENTRY_HEADER_SIZE;
}

/// 目录块内的一项，名字借用自镜像
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDirEntry<'a> {
    /// 块内偏移
    pub offset: usize,
    pub inode: u32,
    pub rec_len: u16,
    pub file_type: u8,
    pub name: &'a [u8],
}

impl RawDirEntry<'_> {
    /// inode 为0的项是已删除或未使用的槽位
    #[inline]
    pub fn is_live(&self) -> bool {
        self.inode != 0
    }

    #[inline]
    pub fn inode(&self) -> InodeId {
        InodeId::new(self.inode)
    }

    /// 目录项自带的文件类型，未启用 filetype 特性时为0
    pub fn kind(&self) -> Option<DirEntryType> {
        use DirEntryType::*;

        Some(match self.file_type {
            1 => Regular,
            2 => Directory,
            3 => Char,
            4 => Block,
            5 => Fifo,
            6 => Socket,
            7 => SymLink,
            _ => return None,
        })
    }
}

/// 按 `rec_len` 遍历一个目录块。
///
/// 遍历以块大小为界，不单凭 `rec_len` 终止；
/// 遇到不合法的项时产出一次错误，之后结束。
#[derive(Debug, Clone)]
pub struct DirEntries<'a> {
    block: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> DirEntries<'a> {
    pub fn new(block: &'a [u8]) -> Self {
        Self {
            block,
            offset: 0,
            failed: false,
        }
    }

    fn parse(&self) -> Result<RawDirEntry<'a>, Malformed> {
        let offset = self.offset;
        let header = self
            .block
            .get(offset..offset + DirEntryHeader::SIZE)
            .ok_or(Malformed::DirEntryTruncated { offset })?;
        let header: DirEntryHeader = decode(header, offset)?;

        let rec_len = header.rec_len as usize;
        let remaining = self.block.len() - offset;
        if rec_len < DirEntryHeader::SIZE || rec_len > remaining {
            return Err(Malformed::RecLen {
                offset,
                rec_len: header.rec_len,
            });
        }

        let name_start = offset + DirEntryHeader::SIZE;
        let name_end = name_start + header.name_len as usize;
        if name_end > offset + rec_len {
            return Err(Malformed::NameLen {
                offset,
                name_len: header.name_len,
            });
        }

        Ok(RawDirEntry {
            offset,
            inode: header.inode,
            rec_len: header.rec_len,
            file_type: header.file_type,
            name: &self.block[name_start..name_end],
        })
    }
}

impl<'a> Iterator for DirEntries<'a> {
    type Item = Result<RawDirEntry<'a>, Malformed>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.block.len() {
            return None;
        }

        match self.parse() {
            Ok(entry) => {
                // rec_len 至少为头部大小，保证前进
                self.offset += entry.rec_len as usize;
                Some(Ok(entry))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
