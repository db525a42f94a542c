use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read markdown source from a file, or from stdin when `path` is `None`.
pub fn read_source(path: Option<&Path>) -> Result<String, IoError> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered HTML to a file, or to stdout when `path` is `None`.
///
/// Parent directories of `path` are created as needed.
pub fn write_html(path: Option<&Path>, html: &str) -> Result<(), IoError> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        if !html.is_empty() && !html.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        return stdout.flush().map_err(IoError::Io);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}
