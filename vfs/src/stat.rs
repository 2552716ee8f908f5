use crate::DirEntryType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    /// Inode number
    pub inode: u64,
    pub kind: DirEntryType,
    /// 低12位的权限位（含 setuid/setgid/sticky）
    pub perm: u16,
    /// 硬链接个数
    pub links: u32,
    /// File size
    pub size: u64,
    /// Occupying 512-byte sectors
    pub blocks: u64,
    /// Optimal I/O block size
    pub block_size: u64,
}
