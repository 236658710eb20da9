use crate::error::DetectorError;
use log::{debug, info};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A reference document, labeled with the language it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Ordered collection of labeled documents.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Corpus { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn labels(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

pub struct CorpusLoader;

impl CorpusLoader {
    pub fn new() -> Self {
        CorpusLoader
    }

    /// Read every regular file directly inside `dir` as one document.
    ///
    /// Files are visited in file-name order and labeled with their file name.
    /// Line endings are normalized to `\n`. Any unreadable or non-UTF-8 file
    /// aborts the load.
    pub fn load_directory(&self, dir: &Path) -> Result<Corpus, DetectorError> {
        if !dir.is_dir() {
            return Err(DetectorError::MissingDirectory(dir.to_path_buf()));
        }

        info!("Loading corpus from {}", dir.display());

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                paths.push(entry.into_path());
            }
        }

        let mut documents = Vec::with_capacity(paths.len());
        let mut total_bytes = 0usize;
        for path in paths {
            let raw = fs::read_to_string(&path).map_err(|source| DetectorError::Read {
                path: path.clone(),
                source,
            })?;
            let text = match normalize_newlines(&raw) {
                Cow::Borrowed(_) => raw,
                Cow::Owned(text) => text,
            };
            let label = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            debug!("Read {} ({} bytes)", label, text.len());
            total_bytes += text.len();
            documents.push(Document { label, text });
        }

        if documents.is_empty() {
            return Err(DetectorError::EmptyCorpus);
        }

        info!(
            "Loaded {} documents ({} bytes) from {}",
            documents.len(),
            total_bytes,
            dir.display()
        );

        Ok(Corpus { documents })
    }
}

/// Rewrite `\r\n` and lone `\r` line endings as `\n`.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}
