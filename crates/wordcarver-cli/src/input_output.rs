use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

type IoResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Open a line reader for an optional input path.
///
/// `None` or `"-"` reads from stdin.
pub fn open_reader(path: Option<&str>) -> IoResult<Box<dyn BufRead>> {
    Ok(match path {
        None | Some("-") => Box::new(BufReader::new(std::io::stdin().lock())),
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
    })
}

/// Open a writer for an optional output path.
///
/// `None` or `"-"` writes to stdout.
pub fn open_writer(path: Option<&str>) -> IoResult<Box<dyn Write>> {
    Ok(match path {
        None | Some("-") => Box::new(BufWriter::new(std::io::stdout().lock())),
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
    })
}
