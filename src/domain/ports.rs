use crate::utils::error::Result;
use chrono::NaiveDate;
use std::path::Path;

/// Source of the per-render identity token and date.
pub trait PackStamper {
    fn package_id(&self) -> String;
    fn today(&self) -> NaiveDate;
}

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}
