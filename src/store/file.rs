//! File-backed state store: one line-per-title text file per key.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::store::{StateStore, StoreError};

/// Stores each key as `<directory>/<key>`.
///
/// Every title is written as one line terminated by `\n`, so an empty title
/// list is an empty file and a trailing empty title survives a reload.
/// Backslashes and line breaks inside a title are escaped (`\\`, `\n`, `\r`).
pub struct FileStateStore {
    directory: PathBuf,
}

impl FileStateStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load(&self, key: &str) -> Result<Vec<String>, StoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(content) => Ok(decode(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn save(&self, key: &str, titles: &[String]) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            key: key.to_string(),
            source,
        };

        if !self.directory.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&self.directory)
                .await
                .map_err(io_err)?;
        }

        tokio::fs::write(self.path_for(key), encode(titles))
            .await
            .map_err(io_err)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

fn encode(titles: &[String]) -> String {
    let mut out = String::new();
    for title in titles {
        for c in title.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                c => out.push(c),
            }
        }
        out.push('\n');
    }
    out
}

fn decode(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    // Files written without a final newline still load.
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n')
        .map(|line| unescape(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

fn unescape(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            // Unknown escapes are kept verbatim.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
