use crate::layout::{DirEntries, DiskInode};
use crate::{Error, Ext2Image, InodeId};

impl<'a> Ext2Image<'a> {
    /// 目录唯一数据块（`i_block[0]`）中的全部目录项
    pub fn dir_entries(&self, dir: &DiskInode) -> Result<DirEntries<'a>, Error> {
        let block = self.block(dir.block(0))?;
        Ok(DirEntries::new(block))
    }

    /// 在目录中按名字查找，返回对应的 inode 编号。
    ///
    /// 名字按字节比较，长度必须一致。inode 为0的项不参与匹配。
    /// 整个块都会扫描完；若有重名（正常的文件系统不会出现），以最后一项为准。
    pub fn find_in_dir(&self, dir: &DiskInode, name: &str) -> Result<Option<InodeId>, Error> {
        let name = name.as_bytes();
        let mut found = None;

        for entry in self.dir_entries(dir)? {
            let entry = entry.inspect_err(|err| log::warn!("Corrupted directory block: {err}"))?;
            log::trace!(
                "dirent@{}: inode={} rec_len={} name={:?}",
                entry.offset,
                entry.inode,
                entry.rec_len,
                entry.name
            );

            if entry.is_live() && entry.name == name {
                found = Some(entry.inode());
            }
        }

        Ok(found)
    }
}
