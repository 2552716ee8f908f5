//! 测试用的镜像构造器
//!
//! 单块组，64个块，32个 inode；目录只占一个块，普通文件只用直接索引。
//! 布局：引导块 | 超级块 | 描述符 | 块位图 | inode 位图 | inode 表 | 数据块

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use crate::InodeId;
use crate::consts::*;
use crate::layout::DirEntryHeader;

const BLOCKS: usize = 64;
const INODES: u32 = 32;
const FIRST_INO: u32 = 11;

pub struct Fixture {
    bytes: Vec<u8>,
    block_size: usize,
    inode_size: usize,
    inode_table: usize,
    next_block: u32,
    /// 目录 inode 编号 -> (数据块号, 最后一项的块内偏移)
    dirs: BTreeMap<u32, (u32, usize)>,
}

impl Fixture {
    /// revision 0，128字节 inode
    pub fn new(log_block_size: u32) -> Self {
        Self::build(log_block_size, GOOD_OLD_REV, GOOD_OLD_INODE_SIZE)
    }

    /// dynamic revision，inode 大小由超级块给出
    pub fn dynamic(log_block_size: u32, inode_size: usize) -> Self {
        Self::build(log_block_size, 1, inode_size)
    }

    pub fn inode_table_block(block_size: usize) -> crate::BlockId {
        crate::BlockId::new((SUPERBLOCK_OFFSET / block_size + 4) as u32)
    }

    fn build(log_block_size: u32, rev_level: u32, inode_size: usize) -> Self {
        let block_size = MIN_BLOCK_SIZE << log_block_size;
        let group_desc = SUPERBLOCK_OFFSET / block_size + 1;
        let inode_table = group_desc + 3;
        let inode_table_blocks = (INODES as usize * inode_size).div_ceil(block_size);

        let mut fixture = Self {
            bytes: vec![0; BLOCKS * block_size],
            block_size,
            inode_size,
            inode_table,
            next_block: (inode_table + inode_table_blocks) as u32,
            dirs: BTreeMap::new(),
        };

        let sb = SUPERBLOCK_OFFSET;
        fixture.put_u32(sb, INODES);
        fixture.put_u32(sb + 4, BLOCKS as u32);
        fixture.put_u32(sb + 20, u32::from(block_size == MIN_BLOCK_SIZE));
        fixture.put_u32(sb + 24, log_block_size);
        fixture.put_u32(sb + 32, 8 * block_size as u32);
        fixture.put_u32(sb + 40, INODES);
        fixture.put_u16(sb + 56, MAGIC);
        fixture.put_u16(sb + 58, 1);
        fixture.put_u32(sb + 76, rev_level);
        if rev_level != GOOD_OLD_REV {
            fixture.put_u32(sb + 84, FIRST_INO);
            fixture.put_u16(sb + 88, inode_size as u16);
        }

        let gd = group_desc * block_size;
        fixture.put_u32(gd, (group_desc + 1) as u32);
        fixture.put_u32(gd + 4, (group_desc + 2) as u32);
        fixture.put_u32(gd + 8, inode_table as u32);

        fixture.make_dir(ROOT_INO, ROOT_INO);
        fixture
    }

    /// 在 `parent` 下创建名为 `name`、编号为 `ino` 的目录
    pub fn dir(&mut self, ino: u32, parent: InodeId, name: &str) -> InodeId {
        self.make_dir(ino, parent.get());
        self.link(parent, name.as_bytes(), ino);
        InodeId::new(ino)
    }

    /// 在 `parent` 下创建普通文件，内容写入直接索引块
    pub fn file(&mut self, ino: u32, parent: InodeId, name: &str, contents: &[u8]) -> InodeId {
        let count = contents.len().div_ceil(self.block_size);
        assert!(count <= DIRECT_COUNT, "fixture files use direct blocks only");

        let blocks: Vec<u32> = contents
            .chunks(self.block_size)
            .map(|chunk| {
                let block = self.alloc_block();
                let start = block as usize * self.block_size;
                self.bytes[start..start + chunk.len()].copy_from_slice(chunk);
                block
            })
            .collect();
        self.write_inode(ino, 0o100644, 1, contents.len() as u32, &blocks);
        self.link(parent, name.as_bytes(), ino);
        InodeId::new(ino)
    }

    /// 追加一条原始目录项，`ino` 可以为0（已删除的项）或重复的名字
    pub fn link(&mut self, dir: InodeId, name: &[u8], ino: u32) {
        let (block, last) = self.dirs[&dir.get()];
        let base = block as usize * self.block_size;

        let last_len = Self::rec_len(self.bytes[base + last + 6] as usize);
        let offset = last + last_len;
        assert!(
            offset + Self::rec_len(name.len()) <= self.block_size,
            "fixture directory block is full"
        );

        self.put_u16(base + last + 4, last_len as u16);
        self.write_entry(base + offset, ino, (self.block_size - offset) as u16, name);
        self.dirs.insert(dir.get(), (block, offset));
    }

    pub fn set_mode(&mut self, ino: u32, mode: u16) {
        let offset = self.inode_offset(ino);
        self.put_u16(offset, mode);
    }

    pub fn set_size(&mut self, ino: u32, size: u32) {
        let offset = self.inode_offset(ino);
        self.put_u32(offset + 4, size);
    }

    pub fn set_block(&mut self, ino: u32, index: usize, block: u32) {
        let offset = self.inode_offset(ino);
        self.put_u32(offset + 40 + 4 * index, block);
    }

    /// 目录数据块在镜像中的字节偏移
    pub fn dir_block_offset(&self, dir: InodeId) -> usize {
        self.dirs[&dir.get()].0 as usize * self.block_size
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

impl Fixture {
    fn make_dir(&mut self, ino: u32, parent: u32) {
        let block = self.alloc_block();
        self.write_inode(ino, 0o040755, 2, self.block_size as u32, &[block]);

        let base = block as usize * self.block_size;
        self.write_entry(base, ino, self.block_size as u16, b".");
        self.dirs.insert(ino, (block, 0));
        self.link(InodeId::new(ino), b"..", parent);
    }

    fn alloc_block(&mut self) -> u32 {
        let block = self.next_block;
        assert!((block as usize) < BLOCKS, "fixture image is full");
        self.next_block += 1;
        block
    }

    fn write_inode(&mut self, ino: u32, mode: u16, links: u16, size: u32, blocks: &[u32]) {
        let offset = self.inode_offset(ino);
        self.put_u16(offset, mode);
        self.put_u32(offset + 4, size);
        self.put_u16(offset + 26, links);
        self.put_u32(
            offset + 28,
            (blocks.len() * self.block_size) as u32 / SECTOR_SIZE as u32,
        );
        for (i, &block) in blocks.iter().enumerate() {
            self.put_u32(offset + 40 + 4 * i, block);
        }
    }

    fn write_entry(&mut self, at: usize, ino: u32, rec_len: u16, name: &[u8]) {
        self.put_u32(at, ino);
        self.put_u16(at + 4, rec_len);
        self.bytes[at + 6] = name.len() as u8;
        self.bytes[at + 7] = 0;
        let name_at = at + DirEntryHeader::SIZE;
        self.bytes[name_at..name_at + name.len()].copy_from_slice(name);
    }

    fn inode_offset(&self, ino: u32) -> usize {
        assert!((1..=INODES).contains(&ino));
        self.inode_table * self.block_size + (ino as usize - 1) * self.inode_size
    }

    /// 头部加名字，按4字节对齐
    fn rec_len(name_len: usize) -> usize {
        (DirEntryHeader::SIZE + name_len).next_multiple_of(4)
    }

    fn put_u16(&mut self, at: usize, value: u16) {
        self.bytes[at..at + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn put_u32(&mut self, at: usize, value: u32) {
        self.bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }
}
