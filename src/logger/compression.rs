//! Gzip compression of rotated log files

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Compresses `path` into `path.gz` and removes the original.
///
/// Returns the path of the compressed file.
pub fn gzip_file(path: &Path) -> io::Result<PathBuf> {
    let mut compressed_name = path.as_os_str().to_owned();
    compressed_name.push(".gz");
    let compressed_path = PathBuf::from(compressed_name);

    let mut input = BufReader::new(File::open(path)?);
    let output = File::create(&compressed_path)?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;

    Ok(compressed_path)
}
