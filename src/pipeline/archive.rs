//! Annotation archive — append-only record of raw request/response
//! pairs.
//!
//! Each successful remote call writes one record file pairing the
//! submitted chunk with the annotated result. Records are never read
//! back by the pipeline. Write failures are logged and never fail the
//! job; archiving must not block annotation.
//!
//! **Directory resolution**:
//! 1. `GLOSSWORK_ARCHIVE_DIR` env var (explicit override)
//! 2. `~/Glosswork/annotations/` otherwise
//! 3. Disabled when no home directory can be determined

use std::path::PathBuf;

use uuid::Uuid;

/// Archive subdirectory under the application data directory.
const ARCHIVE_SUBDIR: &str = "annotations";

/// Append-only sink for (chunk, annotated result) pairs.
pub struct AnnotationArchive {
    dir: Option<PathBuf>,
}

impl AnnotationArchive {
    /// Archive rooted at the resolved default directory.
    pub fn from_env() -> Self {
        Self {
            dir: resolve_base_dir(),
        }
    }

    /// Archive rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Archive that drops all records.
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    /// Persist one (chunk, annotated) pair under a uniquely-named
    /// record. Logs on failure, never panics.
    pub fn record(&self, chunk: &str, annotated: &str) {
        let Some(dir) = &self.dir else { return };

        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::warn!(
                path = %dir.display(),
                error = %e,
                "Annotation archive: failed to create directory"
            );
            return;
        }

        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let unique = Uuid::new_v4().simple().to_string();
        let path = dir.join(format!("annotation_{stamp}_{}.txt", &unique[..8]));

        let body = format!("=== 原始文本 ===\n{chunk}\n=== 注解结果 ===\n{annotated}\n\n");
        match std::fs::write(&path, body.as_bytes()) {
            Ok(()) => tracing::debug!(
                path = %path.display(),
                chunk_chars = chunk.chars().count(),
                "Annotation record written"
            ),
            Err(e) => tracing::warn!(
                path = %path.display(),
                error = %e,
                "Annotation archive: failed to write record"
            ),
        }
    }
}

fn resolve_base_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("GLOSSWORK_ARCHIVE_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join("Glosswork").join(ARCHIVE_SUBDIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_writes_both_sections() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = AnnotationArchive::at(tmp.path());

        archive.record("你好\n", "你[你R]好[好的A]\n");

        let entries: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);

        let content = std::fs::read_to_string(&entries[0]).unwrap();
        assert!(content.contains("=== 原始文本 ===\n你好\n"));
        assert!(content.contains("=== 注解结果 ===\n你[你R]好[好的A]\n"));
    }

    #[test]
    fn record_filenames_are_unique() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = AnnotationArchive::at(tmp.path());

        archive.record("a", "a[啊X]");
        archive.record("b", "b[吧X]");

        let count = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(count, 2);
    }

    #[test]
    fn record_filename_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = AnnotationArchive::at(tmp.path());

        archive.record("x", "x[某X]");

        let entry = std::fs::read_dir(tmp.path()).unwrap().next().unwrap().unwrap();
        let name = entry.file_name().into_string().unwrap();
        assert!(name.starts_with("annotation_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn disabled_archive_writes_nothing() {
        let archive = AnnotationArchive::disabled();
        archive.record("x", "x[某X]");
        // No panic, no output to verify — disabled means dropped.
    }

    #[test]
    fn record_survives_unwritable_directory() {
        let archive = AnnotationArchive::at("/nonexistent/glosswork/archive");
        archive.record("x", "x[某X]");
        // No panic = the job would have proceeded.
    }

    #[test]
    fn directory_resolution_order() {
        // One test covers both branches so the env mutation cannot race
        // a sibling test.
        std::env::remove_var("GLOSSWORK_ARCHIVE_DIR");
        if let Some(dir) = resolve_base_dir() {
            assert!(dir.ends_with("Glosswork/annotations"));
        }

        let tmp = tempfile::tempdir().unwrap();
        std::env::set_var("GLOSSWORK_ARCHIVE_DIR", tmp.path());
        assert_eq!(resolve_base_dir().unwrap(), tmp.path());
        std::env::remove_var("GLOSSWORK_ARCHIVE_DIR");
    }
}
