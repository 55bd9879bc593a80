use serde::{Deserialize, Serialize};

/// One uploaded file: the name the client sent and where the storage
/// service put it, relative to the storage root (`/<category>/<name>`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub original_filename: String,
    pub path: String,
}

impl FileRecord {
    pub fn new(original_filename: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            original_filename: original_filename.into(),
            path: path.into(),
        }
    }

    /// Relative path for a stored file.
    pub fn public_path(category: &str, name: &str) -> String {
        format!("/{category}/{name}")
    }

    /// Splits `path` back into `(category, name)`.
    pub fn segments(&self) -> Option<(&str, &str)> {
        let (category, name) = self.path.strip_prefix('/')?.split_once('/')?;
        if category.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some((category, name))
    }
}

#[cfg(test)]
mod tests {
    use super::FileRecord;

    #[test]
    fn segments_split_category_and_name() {
        let record = FileRecord::new("photo.png", FileRecord::public_path("phones", "a.png"));
        assert_eq!(record.path, "/phones/a.png");
        assert_eq!(record.segments(), Some(("phones", "a.png")));
    }

    #[test]
    fn segments_reject_malformed_paths() {
        for path in ["phones/a.png", "/phones", "/phones/", "//a.png", "/a/b/c.png"] {
            assert_eq!(FileRecord::new("x", path).segments(), None, "{path}");
        }
    }
}
