//! 面向上层工具的操作
//!
//! ext2cat 这类工具先解析路径，再据 inode 列目录、查看元信息或读出文件内容。

use alloc::string::String;
use alloc::vec::Vec;

use vfs::{DirEntry, DirEntryType, Stat};

use crate::consts::DIRECT_COUNT;
use crate::layout::DiskInode;
use crate::{BlockId, Error, Ext2Image, InodeId, Malformed, Unsupported};

impl Ext2Image<'_> {
    /// 在编号为 `dir` 的目录下查找单个分量
    pub fn lookup(&self, dir: InodeId, name: &str) -> Result<Option<InodeId>, Error> {
        let inode = self.inode(dir)?;
        if !inode.is_dir() {
            return Err(Error::NotADirectory);
        }
        self.find_in_dir(&inode, name)
    }

    /// 目录下的有效项，保持磁盘上的顺序。
    ///
    /// 类型取自目标 inode 的 mode；目标 inode 读不出或 mode 无效时，
    /// 退回目录项自带的 `file_type`，都没有则记为普通文件。
    pub fn read_dir(&self, dir: InodeId) -> Result<Vec<DirEntry>, Error> {
        let inode = self.inode(dir)?;
        if !inode.is_dir() {
            return Err(Error::NotADirectory);
        }

        let mut entries = Vec::new();
        for entry in self.dir_entries(&inode)? {
            let entry = entry.inspect_err(|err| log::warn!("Corrupted directory block: {err}"))?;
            if !entry.is_live() {
                continue;
            }

            let ty = match self.kind_of(entry.inode()) {
                Ok(ty) => ty,
                Err(err) => {
                    log::warn!("Entry {:?} -> inode {}: {err}", entry.name, entry.inode);
                    entry.kind().unwrap_or_default()
                }
            };
            entries.push(DirEntry {
                inode: entry.inode().into(),
                ty,
                name: String::from_utf8_lossy(entry.name).into_owned(),
            });
        }

        Ok(entries)
    }

    pub fn stat(&self, ino: InodeId) -> Result<Stat, Error> {
        let inode = self.inode(ino)?;
        Ok(Stat {
            inode: ino.into(),
            kind: Self::kind(ino, &inode)?,
            perm: inode.permissions().bits(),
            links: inode.links_count.into(),
            size: inode.size(),
            blocks: inode.blocks.into(),
            block_size: self.block_size() as u64,
        })
    }

    /// 读出普通文件的全部内容。
    ///
    /// 只支持直接索引；未分配的块（空洞）读作0。
    pub fn read_file(&self, ino: InodeId) -> Result<Vec<u8>, Error> {
        let inode = self.inode(ino)?;
        if !inode.is_file() {
            return Err(Error::NotAFile);
        }

        let block_size = self.block_size();
        let size = inode.size();
        if size > (DIRECT_COUNT * block_size) as u64 {
            return Err(Unsupported::IndirectBlocks.into());
        }

        let size = size as usize;
        let mut data = Vec::with_capacity(size);
        for index in 0..size.div_ceil(block_size) {
            let len = (size - data.len()).min(block_size);
            match inode.block(index) {
                BlockId::HOLE => data.resize(data.len() + len, 0),
                id => data.extend_from_slice(&self.block(id)?[..len]),
            }
        }

        log::debug!("Read {} bytes from inode {ino}", data.len());
        Ok(data)
    }
}

impl Ext2Image<'_> {
    fn kind_of(&self, ino: InodeId) -> Result<DirEntryType, Error> {
        Self::kind(ino, &self.inode(ino)?)
    }

    fn kind(ino: InodeId, inode: &DiskInode) -> Result<DirEntryType, Error> {
        inode.kind().ok_or(
            Malformed::FileType {
                inode: ino.get(),
                mode: inode.mode,
            }
            .into(),
        )
    }
}
