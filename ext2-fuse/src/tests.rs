use std::io;

use vfs::{DirEntry, DirEntryType, Stat};

use crate::*;

#[test]
fn mode_strings() {
    assert_eq!(mode_string(DirEntryType::Directory, 0o755), "drwxr-xr-x");
    assert_eq!(mode_string(DirEntryType::Regular, 0o644), "-rw-r--r--");
    assert_eq!(mode_string(DirEntryType::SymLink, 0o777), "lrwxrwxrwx");
    assert_eq!(mode_string(DirEntryType::Regular, 0o4755), "-rwsr-xr-x");
    assert_eq!(mode_string(DirEntryType::Regular, 0o2644), "-rw-r-Sr--");
    assert_eq!(mode_string(DirEntryType::Directory, 0o1777), "drwxrwxrwt");
    assert_eq!(mode_string(DirEntryType::Fifo, 0), "p---------");
}

#[test]
fn error_kinds() {
    use ext2::{Error, Malformed, Unsupported};

    let err = io_error("/etc/missing", Error::NotFound);
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert_eq!(err.to_string(), "/etc/missing: no such file or directory");

    assert_eq!(
        io_error("etc", Error::InvalidPath).kind(),
        io::ErrorKind::InvalidInput
    );
    assert_eq!(
        io_error("/", Error::Malformed(Malformed::BadMagic(0))).kind(),
        io::ErrorKind::InvalidData
    );
    assert_eq!(
        io_error("/big", Error::Unsupported(Unsupported::IndirectBlocks)).kind(),
        io::ErrorKind::Unsupported
    );
}

#[test]
fn dir_entry_line() {
    let entry = DirEntry {
        inode: 11,
        ty: DirEntryType::Directory,
        name: "etc".to_owned(),
    };
    assert_eq!(format_dir_entry(&entry), "      11 d etc");
}

#[test]
fn stat_report() {
    let stat = Stat {
        inode: 15,
        kind: DirEntryType::Regular,
        perm: 0o644,
        links: 1,
        size: 2048,
        blocks: 4,
        block_size: 1024,
    };
    let report = format_stat("/etc/passwd", &stat);
    assert!(report.contains("File: /etc/passwd"));
    assert!(report.contains("Inode: 15"));
    assert!(report.contains("-rw-r--r-- (0644)"));
    assert!(report.contains("(2048 bytes)"));
}

#[test]
fn not_an_image() {
    let file = ImageFile(vec![0; 512]);
    assert!(matches!(
        file.open(),
        Err(ext2::Error::Malformed(ext2::Malformed::TooSmall { len: 512 }))
    ));
}
