use std::{fs::File, path::Path};

use serde::Deserialize;


/// One conformance case, all fields hex-encoded.
#[derive(Debug, Deserialize)]
pub(crate) struct TestVector {
    pub sk: String,
    pub pk: String,
    pub alpha: String,
    pub pi: String,
    pub beta: String,
}

pub(crate) fn read_test_vectors(path: &str) -> Vec<TestVector> {
    let file = File::open(Path::new(path)).unwrap();
    serde_json::from_reader(file).expect("JSON was not well-formatted")
}
