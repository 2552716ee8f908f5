use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Error {
    #[display(fmt = "no such file or directory")]
    NotFound,
    /// 空路径，或不以 `/` 开头
    #[display(fmt = "path must be absolute")]
    InvalidPath,
    #[display(fmt = "not a directory")]
    NotADirectory,
    #[display(fmt = "not a regular file")]
    NotAFile,
    #[display(fmt = "malformed image: {}", _0)]
    Malformed(Malformed),
    #[display(fmt = "unsupported: {}", _0)]
    Unsupported(Unsupported),
}

/// 镜像内容与 ext2 布局不符。
///
/// 偏移均为字节：目录项相关的偏移是块内偏移，其余是镜像内偏移。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Malformed {
    #[display(fmt = "image of {} bytes cannot hold a superblock", len)]
    TooSmall { len: usize },
    #[display(fmt = "bad superblock magic {:#06x}", _0)]
    BadMagic(u16),
    #[display(fmt = "block size exponent {} out of range", _0)]
    BlockSize(u32),
    #[display(fmt = "inode size {} out of range", _0)]
    InodeSize(usize),
    #[display(fmt = "superblock reports zero inodes per group")]
    InodesPerGroup,
    #[display(fmt = "{} bytes at offset {} lie outside the image", len, offset)]
    OutOfBounds { offset: usize, len: usize },
    #[display(fmt = "inode {} out of range", _0)]
    InodeOutOfRange(u32),
    #[display(fmt = "inode {} has unknown mode {:#o}", inode, mode)]
    FileType { inode: u32, mode: u16 },
    #[display(fmt = "directory entry at offset {} has bad rec_len {}", offset, rec_len)]
    RecLen { offset: usize, rec_len: u16 },
    #[display(fmt = "directory entry at offset {} has name_len {} beyond its record", offset, name_len)]
    NameLen { offset: usize, name_len: u8 },
    #[display(fmt = "directory entry at offset {} is cut off by the block end", offset)]
    DirEntryTruncated { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Unsupported {
    #[display(fmt = "block group {}", _0)]
    BlockGroup(u32),
    #[display(fmt = "file data in indirect blocks")]
    IndirectBlocks,
}

impl From<Malformed> for Error {
    fn from(err: Malformed) -> Self {
        Self::Malformed(err)
    }
}

impl From<Unsupported> for Error {
    fn from(err: Unsupported) -> Self {
        Self::Unsupported(err)
    }
}

impl core::error::Error for Error {}
