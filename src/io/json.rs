/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! JSON configurations

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::errors::Result;
use crate::config::Configuration;

/// Read a serialized [`Configuration`] and check its shape
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let reader = BufReader::new(File::open(path)?);
    let conf: Configuration = serde_json::from_reader(reader)?;
    conf.validate()?;
    Ok(conf)
}

/// Write a [`Configuration`] as pretty-printed JSON
pub fn write_json<P: AsRef<Path>>(conf: &Configuration, path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, conf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Cell, Vector3D};
    use crate::io::IoError;
    use std::io::Write;

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.json");
        let conf = Configuration::new(
            ["Si", "Si"],
            vec![Vector3D::origin(), Vector3D::new(1.3575, 1.3575, 1.3575)],
            Cell::cubic(5.43),
            [true; 3],
        )
        .unwrap();

        write_json(&conf, &path).unwrap();
        assert_eq!(read_json(&path).unwrap(), conf);
    }

    #[test]
    fn test_json_shape_is_checked() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"species": ["Si", "Si"], "coords": [[0, 0, 0]],
                "cell": [[1, 0, 0], [0, 1, 0], [0, 0, 1]], "pbc": [true, true, true]}}"#
        )
        .unwrap();
        assert!(matches!(read_json(file.path()), Err(IoError::Config(_))));
    }
}
