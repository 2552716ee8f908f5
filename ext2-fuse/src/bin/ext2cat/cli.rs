use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "Inspect files inside an ext2 image")]
pub struct Cli {
    /// ext2 filesystem image
    #[arg(long, short)]
    pub image: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the inode number of an absolute path
    Resolve { path: String },
    /// Print inode metadata
    Stat { path: String },
    /// List a directory
    Ls {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Write a regular file to stdout
    Cat { path: String },
}
