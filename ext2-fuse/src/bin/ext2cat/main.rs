mod cli;

use std::io::{self, Write};

use clap::Parser;
use cli::{Cli, Command};
use ext2_fuse::{ImageFile, format_dir_entry, format_stat, io_error};

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("image={:?}", cli.image);

    let file = ImageFile::load(&cli.image)?;
    let image = file
        .open()
        .map_err(|err| io_error(cli.image.display(), err))?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Resolve { path } => {
            let ino = image.resolve_path(&path).map_err(|err| io_error(&path, err))?;
            writeln!(stdout, "{ino}")?;
        }
        Command::Stat { path } => {
            let stat = image
                .resolve_path(&path)
                .and_then(|ino| image.stat(ino))
                .map_err(|err| io_error(&path, err))?;
            writeln!(stdout, "{}", format_stat(&path, &stat))?;
        }
        Command::Ls { path } => {
            let entries = image
                .resolve_path(&path)
                .and_then(|ino| image.read_dir(ino))
                .map_err(|err| io_error(&path, err))?;
            for entry in &entries {
                writeln!(stdout, "{}", format_dir_entry(entry))?;
            }
        }
        Command::Cat { path } => {
            let data = image
                .resolve_path(&path)
                .and_then(|ino| image.read_file(ino))
                .map_err(|err| io_error(&path, err))?;
            stdout.write_all(&data)?;
        }
    }

    stdout.flush()
}
