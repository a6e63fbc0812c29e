use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::models::FileThreshold;

/// First two bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

///
/// Check whether a file is gzip compressed by looking at its magic bytes.
/// The file name is not taken into account.
///
pub fn is_gz_file(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 2];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == GZIP_MAGIC),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file. Compression is
/// detected from the content, so `reads.fq` holding gzip data is still
/// decompressed.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = is_gz_file(path)?;
    let file = File::open(path)?;

    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// A regular file whose size is at least `min_file_size` bytes. Paths that
/// do not exist, directories and broken links all return `false`.
///
pub fn is_nonempty_file(path: &Path, min_file_size: u64) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.len() >= min_file_size,
        Err(_) => false,
    }
}

///
/// Count lines in a reader, stopping as soon as `limit` lines were seen.
/// A trailing line without a newline counts as a line.
///
pub fn count_lines_up_to<R: BufRead>(mut reader: R, limit: u64) -> io::Result<u64> {
    let mut count = 0u64;
    if count >= limit {
        return Ok(count);
    }

    let mut partial_line = false;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let len = buf.len();
        for &byte in buf {
            if byte == b'\n' {
                count += 1;
                partial_line = false;
                if count >= limit {
                    return Ok(count);
                }
            } else {
                partial_line = true;
            }
        }
        reader.consume(len);
    }

    if partial_line {
        count += 1;
    }
    Ok(count)
}

///
/// Test whether a (possibly gzip compressed) file holds at least
/// `min_num_lines` lines. Empty files never pass.
///
pub fn file_has_min_lines(path: &Path, min_num_lines: u64) -> io::Result<bool> {
    if !is_nonempty_file(path, 1) {
        return Ok(false);
    }
    let reader = get_dynamic_reader(path)?;
    let lines = count_lines_up_to(reader, min_num_lines)?;
    Ok(lines >= min_num_lines)
}

///
/// Apply a [FileThreshold] policy to a candidate input file.
///
pub fn passes_threshold(path: &Path, threshold: &FileThreshold) -> io::Result<bool> {
    match threshold {
        FileThreshold::MinFileSize(min_file_size) => Ok(is_nonempty_file(path, *min_file_size)),
        FileThreshold::MinLines(min_num_lines) => file_has_min_lines(path, *min_num_lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use std::path::PathBuf;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    const CONTENT: &str = "this\nfile\nhas\ncontents";

    #[fixture]
    fn tempdir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write_plain(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn write_gz(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();
        path
    }

    #[rstest]
    fn test_detects_gzip_from_magic_bytes(tempdir: TempDir) {
        let gz = write_gz(&tempdir, "reads.fastq", CONTENT);
        let plain = write_plain(&tempdir, "reads.fastq.gz", CONTENT);
        let tiny = write_plain(&tempdir, "tiny.txt", "x");

        assert!(is_gz_file(&gz).unwrap());
        assert!(!is_gz_file(&plain).unwrap());
        assert!(!is_gz_file(&tiny).unwrap());
    }

    #[rstest]
    fn test_nonempty_file(tempdir: TempDir) {
        let path = write_plain(&tempdir, "nonempty.txt", CONTENT);
        let empty = write_plain(&tempdir, "empty.txt", "");

        assert!(is_nonempty_file(&path, 0));
        assert!(is_nonempty_file(&path, CONTENT.len() as u64));
        assert!(!is_nonempty_file(&path, CONTENT.len() as u64 + 1));
        assert!(is_nonempty_file(&empty, 0));
        assert!(!is_nonempty_file(&empty, 1));
        assert!(!is_nonempty_file(tempdir.path(), 0));
        assert!(!is_nonempty_file(&tempdir.path().join("missing.txt"), 0));
    }

    #[rstest]
    #[case("", 0)]
    #[case("one", 1)]
    #[case("one\n", 1)]
    #[case("one\ntwo", 2)]
    #[case("one\ntwo\n\n", 3)]
    fn test_count_lines(#[case] content: &str, #[case] expected: u64) {
        let count = count_lines_up_to(content.as_bytes(), u64::MAX).unwrap();
        assert_eq!(count, expected);
    }

    #[test]
    fn test_count_lines_stops_at_limit() {
        let content = "a\n".repeat(1000);
        let count = count_lines_up_to(content.as_bytes(), 10).unwrap();
        assert_eq!(count, 10);
    }

    #[rstest]
    fn test_min_lines_plain_file(tempdir: TempDir) {
        let path = write_plain(&tempdir, "nonempty.txt", CONTENT);
        let empty = write_plain(&tempdir, "empty.txt", "");

        assert!(file_has_min_lines(&path, 0).unwrap());
        assert!(file_has_min_lines(&path, 4).unwrap());
        assert!(!file_has_min_lines(&path, 5).unwrap());
        assert!(!file_has_min_lines(&empty, 1).unwrap());
        assert!(!file_has_min_lines(&tempdir.path().join("missing"), 0).unwrap());
    }

    #[rstest]
    fn test_min_lines_gzipped_file(tempdir: TempDir) {
        // an empty gzip stream still has a header, so it is not empty on disk
        let empty_gz = write_gz(&tempdir, "empty.txt.gz", "");
        assert!(is_nonempty_file(&empty_gz, 1));
        assert!(file_has_min_lines(&empty_gz, 0).unwrap());
        assert!(!file_has_min_lines(&empty_gz, 3).unwrap());
    }

    #[rstest]
    fn test_gzip_counts_match_plain_text(tempdir: TempDir) {
        let content = "@r1\nACGT\n+\nIIII\n@r2\nACGT\n+\nIIII\n";
        let plain = write_plain(&tempdir, "reads.fastq", content);
        let gz = write_gz(&tempdir, "reads.fastq.gz", content);

        for min in 0..10 {
            assert_eq!(
                file_has_min_lines(&plain, min).unwrap(),
                file_has_min_lines(&gz, min).unwrap(),
                "disagreement at min_num_lines = {}",
                min
            );
        }
        assert!(file_has_min_lines(&gz, 8).unwrap());
        assert!(!file_has_min_lines(&gz, 9).unwrap());
    }

    #[rstest]
    fn test_passes_threshold(tempdir: TempDir) {
        let gz = write_gz(&tempdir, "short.fastq.gz", "@r1\nACGT\n");

        assert!(passes_threshold(&gz, &FileThreshold::default()).unwrap());
        assert!(passes_threshold(&gz, &FileThreshold::MinLines(2)).unwrap());
        assert!(!passes_threshold(&gz, &FileThreshold::MinLines(1000)).unwrap());
        assert!(!passes_threshold(&gz, &FileThreshold::MinFileSize(1_000_000)).unwrap());
        assert!(!passes_threshold(tempdir.path(), &FileThreshold::default()).unwrap());
    }
}
