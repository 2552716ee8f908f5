use crate::path::split;
use crate::{Error, Ext2Image, InodeId};

impl Ext2Image<'_> {
    /// 由绝对路径得到 inode 编号。
    ///
    /// 从根目录起逐个分量下降：当前 inode 必须是目录，且分量必须存在于其中，
    /// 否则为 [`Error::NotFound`]。`"/"` 得到根目录本身。
    pub fn resolve_path(&self, path: &str) -> Result<InodeId, Error> {
        let mut ino = InodeId::ROOT;

        for name in split(path)? {
            let inode = self.inode(ino)?;
            if !inode.is_dir() {
                log::debug!("{path:?}: inode {ino} isn't directory, can't descend into {name:?}");
                return Err(Error::NotFound);
            }

            ino = self.find_in_dir(&inode, name)?.ok_or_else(|| {
                log::debug!("{path:?}: no {name:?} in inode {ino}");
                Error::NotFound
            })?;
            log::trace!("{name:?} -> inode {ino}");
        }

        Ok(ino)
    }
}

/// 在镜像字节上直接解析路径，见 [`Ext2Image::resolve_path`]
pub fn resolve_path(image: &[u8], path: &str) -> Result<InodeId, Error> {
    Ext2Image::open(image)?.resolve_path(path)
}
