use std::fs;
use std::io;
use std::path::Path;

/// Reads a newline-delimited URL list.
///
/// Blank and whitespace-only lines are skipped. Every other line is passed
/// through as-is, in file order, duplicates and padding included.
pub fn read_urls<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let urls = parse_url_list(&contents);

    ::log::debug!(
        "Read {} URLs from {}",
        urls.len(),
        path.as_ref().display()
    );
    Ok(urls)
}

/// Splits URL list contents into non-empty lines
pub fn parse_url_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
