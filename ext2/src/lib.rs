#![no_std]

extern crate alloc;

/* ext2 只读访问层的整体架构，自下而上 */

// 磁盘布局常量
pub mod consts;

// 磁盘数据结构层：超级块、块组描述符、inode、目录项
pub mod layout;

// 原始布局访问层：在镜像字节上定位各个结构，所有偏移都经过边界检查
mod image;

// 路径切分
mod path;

// 目录项解析：在单个目录块中按名字查找
mod dir;

// 路径解析：从根目录逐级下降
mod resolve;

// 面向上层工具的操作：列目录、stat、读文件
mod fs;

mod error;
mod id;

#[cfg(test)]
mod fixture;

pub use self::{
    error::{Error, Malformed, Unsupported},
    id::{BlockId, InodeId},
    image::Ext2Image,
    path::{Components, split},
    resolve::resolve_path,
};
