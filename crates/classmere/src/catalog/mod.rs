/// Course catalog data model and JSON decoding
///
/// Records come from the Classmere catalog API. Courses require a subject
/// code and course number; every other field decodes permissively.
mod building;
mod error;
mod fields;
mod listing;
mod types;

pub use building::Building;
pub use error::CatalogError;
pub use listing::CourseList;
pub use types::{Course, Section};
