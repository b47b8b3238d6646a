//! Collections of courses decoded from catalog documents.

use super::error::CatalogError;
use super::types::Course;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// An ordered list of decoded courses.
///
/// Records that fail to decode are skipped and counted rather than failing
/// the whole list.
#[derive(Debug, Clone, Default)]
pub struct CourseList {
    courses: Vec<Course>,
    skipped: usize,
}

impl CourseList {
    /// Decodes a JSON array of course records.
    ///
    /// A single object is treated as a one-element list. Malformed records
    /// are logged and skipped; the remaining courses keep document order.
    ///
    /// # Returns
    /// * `Ok(CourseList)` - The decoded courses
    /// * `Err(CatalogError::NotAList)` - If `document` is neither an array
    ///   nor an object
    pub fn from_json(document: &Value) -> Result<Self, CatalogError> {
        let records = match document {
            Value::Array(records) => records.as_slice(),
            Value::Object(_) => std::slice::from_ref(document),
            _ => return Err(CatalogError::NotAList),
        };

        let mut list = Self::default();
        for record in records {
            list.push_record(record)?;
        }

        Ok(list)
    }

    /// Parses `text` as JSON and decodes it with [`CourseList::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_json(&document)
    }

    /// Loads every `*.json` file in `catalog_dir`, in file-name order.
    ///
    /// # Arguments
    /// * `catalog_dir` - Directory holding catalog documents
    ///
    /// # Returns
    /// * `Ok(CourseList)` - All courses from all files; empty if the
    ///   directory does not exist
    /// * `Err` - If a file can't be read or isn't valid JSON
    pub fn load_from_directory(catalog_dir: &Path) -> Result<Self, CatalogError> {
        let mut list = Self::default();

        if !catalog_dir.is_dir() {
            warn!("Catalog directory {:?} not found", catalog_dir);
            return Ok(list);
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(catalog_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            list.extend(Self::load_file(&path)?);
        }

        info!(
            "Loaded {} courses from {:?} ({} skipped)",
            list.len(),
            catalog_dir,
            list.skipped
        );

        Ok(list)
    }

    /// Loads a single catalog document.
    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let with_path = |err: CatalogError| match err {
            CatalogError::InvalidJson { message } => CatalogError::InvalidJson {
                message: format!("{}: {}", path.display(), message),
            },
            CatalogError::Io { message } => CatalogError::Io {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        };

        let content = fs::read_to_string(path).map_err(|err| with_path(err.into()))?;
        Self::from_json_str(&content).map_err(with_path)
    }

    /// Appends the courses of `other`, keeping its order.
    pub fn extend(&mut self, other: CourseList) {
        self.courses.extend(other.courses);
        self.skipped += other.skipped;
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Number of records skipped because they failed to decode.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Finds the first course with the given identity.
    pub fn find(&self, subject_code: &str, course_number: i64) -> Option<&Course> {
        let key = Course::new(subject_code, course_number);
        self.courses.iter().find(|course| **course == key)
    }

    pub fn into_vec(self) -> Vec<Course> {
        self.courses
    }

    fn push_record(&mut self, record: &Value) -> Result<(), CatalogError> {
        match Course::from_json(record) {
            Ok(course) => self.courses.push(course),
            Err(err) if err.is_record_error() => {
                warn!("Skipping course record ({}): {}", err, record);
                self.skipped += 1;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CourseList {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
