use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole corpus stream into memory.
///
/// - Line breaks are kept: they are characters of the corpus like any other
/// - Invalid UTF-8 is reported as `io::ErrorKind::InvalidData`
pub(crate) fn read_corpus<R: Read>(mut reader: R) -> io::Result<String> {
	let mut contents = String::new();
	reader.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Opens a text file and reads it with [`read_corpus`].
pub(crate) fn read_corpus_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	read_corpus(File::open(filename)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_line_breaks() {
		let text = read_corpus("ab\ncd\r\n".as_bytes()).unwrap();
		assert_eq!(text, "ab\ncd\r\n");
	}

	#[test]
	fn rejects_invalid_utf8() {
		let err = read_corpus(&[0x61, 0xff, 0x62][..]).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidData);
	}

	#[test]
	fn missing_file_is_an_error() {
		let err = read_corpus_file("this/file/does/not/exist.txt").unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}
}
