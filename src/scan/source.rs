use std::path::PathBuf;

pub const STDIN_NAME: &str = "<stdin>";

/// A named, line-oriented input scanned exactly once.
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    /// Builds the source list for a run; no paths means standard input.
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Source> {
        if paths.is_empty() {
            vec![Source::Stdin]
        } else {
            paths.iter().cloned().map(Source::File).collect()
        }
    }

    pub fn name(&self) -> String {
        match self {
            Source::File(path) => path.to_string_lossy().into_owned(),
            Source::Stdin => STDIN_NAME.into(),
        }
    }
}
