#![no_std]

extern crate alloc;

mod dirent;
mod stat;

pub use self::{
    dirent::{DirEntry, DirEntryType},
    stat::Stat,
};
