//! SHA-256 helpers for files and streams.

use sha256_stream::Sha256;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Default read size when streaming inputs into the hasher.
pub(crate) const DEFAULT_CHUNK_SIZE: usize = 8192;
/// Largest read size accepted from the command line (16 MiB).
pub(crate) const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Parse a `--chunk-size` value, bounded to `1..=MAX_CHUNK_SIZE`.
pub(crate) fn parse_chunk_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .trim()
        .parse()
        .map_err(|err| format!("not a byte count: {err}"))?;
    if size == 0 || size > MAX_CHUNK_SIZE {
        return Err(format!("must be between 1 and {MAX_CHUNK_SIZE}"));
    }
    Ok(size)
}

/// Digest and size of one hashed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digest {
    pub(crate) sha256: String,
    pub(crate) bytes: u64,
}

/// Hash everything a reader yields, `chunk_size` bytes at a time.
pub(crate) fn sha256_reader<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        hasher.update(&buffer[..read]);
    }
    let bytes = hasher.bytes_hashed();
    Ok(Digest {
        sha256: hasher.finalize(),
        bytes,
    })
}

/// Hash a file by streaming its contents.
pub(crate) fn sha256_file(path: &Path, chunk_size: usize) -> io::Result<Digest> {
    let file = fs::File::open(path)?;
    sha256_reader(file, chunk_size)
}

/// Hash standard input until EOF.
pub(crate) fn sha256_stdin(chunk_size: usize) -> io::Result<Digest> {
    sha256_reader(io::stdin().lock(), chunk_size)
}
