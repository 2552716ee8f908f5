use alloc::string::String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Inode number
    pub inode: u64,
    pub ty: DirEntryType,
    /// 磁盘上的名字不一定是UTF-8，此处为有损转换的结果
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DirEntryType {
    Block,
    Char,
    Directory,
    Fifo,
    SymLink,
    Socket,
    #[default]
    Regular,
}

impl DirEntryType {
    /// `ls -l` 首列所用的类型字符
    pub const fn as_char(self) -> char {
        match self {
            Self::Block => 'b',
            Self::Char => 'c',
            Self::Directory => 'd',
            Self::Fifo => 'p',
            Self::SymLink => 'l',
            Self::Socket => 's',
            Self::Regular => '-',
        }
    }
}
