use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use classmere::config::Config;
use classmere::{Course, CourseList};

/// Classmere catalog reader
#[derive(Debug, Parser)]
#[command(name = "classmere")]
#[command(about = "Decode Classmere course catalog JSON", long_about = None)]
pub struct Cli {
    /// Print the decoded courses as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Catalog JSON files or directories of them
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Paths to read: the ones given on the command line, or the configured
    /// catalog directory when none were given.
    pub fn catalog_paths(&self, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
        if !self.paths.is_empty() {
            return Ok(self.paths.clone());
        }

        match &config.catalog_dir {
            Some(dir) => Ok(vec![dir.clone()]),
            None => bail!("no catalog paths given and CLASSMERE_CATALOG_DIR is unset"),
        }
    }
}

/// Loads a catalog file, or every catalog file in a directory.
pub fn load(path: &Path) -> anyhow::Result<CourseList> {
    let list = if path.is_dir() {
        CourseList::load_from_directory(path)
    } else {
        CourseList::load_file(path)
    };
    list.with_context(|| format!("failed to load catalog from {}", path.display()))
}

/// One tab-separated line: label, title and section count.
pub fn summary_line(course: &Course) -> String {
    let label = course
        .abbr()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{} {}", course.subject_code(), course.course_number()));

    format!(
        "{}\t{}\t{} sections",
        label,
        course.title().unwrap_or("-"),
        course.sections().len()
    )
}
