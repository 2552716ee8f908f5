#[cfg(test)]
mod tests;

use std::fs;
use std::io;
use std::path::Path;

use enumflags2::BitFlags;
use ext2::Ext2Image;
use ext2::layout::ModeFlag;
use typed_bytesize::ByteSizeIec;
use vfs::{DirEntry, DirEntryType, Stat};

/// 整个读入内存的镜像文件
pub struct ImageFile(pub Vec<u8>);

impl ImageFile {
    pub fn load(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        log::info!("Loaded {} bytes from {path:?}", bytes.len());
        Ok(Self(bytes))
    }

    pub fn open(&self) -> Result<Ext2Image<'_>, ext2::Error> {
        Ext2Image::open(&self.0)
    }
}

/// 把 [`ext2::Error`] 连同出错的对象一起转为 [`io::Error`]
pub fn io_error(what: impl std::fmt::Display, err: ext2::Error) -> io::Error {
    use ext2::Error::*;
    let kind = match err {
        NotFound => io::ErrorKind::NotFound,
        InvalidPath | NotAFile => io::ErrorKind::InvalidInput,
        NotADirectory => io::ErrorKind::NotADirectory,
        Malformed(_) => io::ErrorKind::InvalidData,
        Unsupported(_) => io::ErrorKind::Unsupported,
    };
    io::Error::new(kind, format!("{what}: {err}"))
}

/// `ls -l` 风格的模式字符串，如 `drwxr-xr-x`
pub fn mode_string(kind: DirEntryType, perm: u16) -> String {
    use ModeFlag::*;

    let perm: BitFlags<ModeFlag> = BitFlags::from_bits_truncate(perm);
    let mut s = String::with_capacity(10);
    s.push(kind.as_char());

    for (read, write, exec, special, mark) in [
        (UserRead, UserWrite, UserExec, SetUid, 's'),
        (GroupRead, GroupWrite, GroupExec, SetGid, 's'),
        (OtherRead, OtherWrite, OtherExec, Sticky, 't'),
    ] {
        s.push(if perm.contains(read) { 'r' } else { '-' });
        s.push(if perm.contains(write) { 'w' } else { '-' });
        s.push(match (perm.contains(exec), perm.contains(special)) {
            (true, true) => mark,
            (false, true) => mark.to_ascii_uppercase(),
            (true, false) => 'x',
            (false, false) => '-',
        });
    }

    s
}

pub fn format_stat(path: &str, stat: &Stat) -> String {
    format!(
        "  File: {path}\n Inode: {}  Links: {}\n  Mode: {} ({:04o})\n  Size: {} ({} bytes)\nBlocks: {} (IO block {})",
        stat.inode,
        stat.links,
        mode_string(stat.kind, stat.perm),
        stat.perm,
        ByteSizeIec(stat.size),
        stat.size,
        stat.blocks,
        stat.block_size,
    )
}

pub fn format_dir_entry(entry: &DirEntry) -> String {
    format!("{:>8} {} {}", entry.inode, entry.ty.as_char(), entry.name)
}
