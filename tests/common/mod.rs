#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub const TOKEN: &str = "2a54a886a8bbcc309ae4ffa75241cd6d";

/// Path of the 26-record reference dataset.
pub fn dataset_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/dataset.csv")
}

/// Writes a dataset file with the standard header and the given rows.
pub fn broken_dataset(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp dataset");
    writeln!(file, "id,first_name,last_name,age,about,gender").expect("write header");
    file.write_all(rows.as_bytes()).expect("write rows");
    file
}
