/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use std::fs;

use padneigh::config::{AtomicConfiguration, Configuration, CutoffSpec};
use padneigh::geometry::{Cell, Vector3D};
use padneigh::io::{read_configuration, write_json, IoError};
use padneigh::neighbor::{build_all, NeighborList, NeighborOptions};

const SILICON: &str = "8
Lattice=\"5.43 0 0 0 5.43 0 0 0 5.43\" PBC=\"T T T\" Properties=species:S:1:pos:R:3
Si 0.0 0.0 0.0
Si 0.0 2.715 2.715
Si 2.715 0.0 2.715
Si 2.715 2.715 0.0
Si 1.3575 1.3575 1.3575
Si 1.3575 4.0725 4.0725
Si 4.0725 1.3575 4.0725
Si 4.0725 4.0725 1.3575
";

fn silicon_by_hand() -> Configuration {
    let a = 5.43;
    let basis = [
        [0.0, 0.0, 0.0],
        [0.0, 0.5, 0.5],
        [0.5, 0.0, 0.5],
        [0.5, 0.5, 0.0],
        [0.25, 0.25, 0.25],
        [0.25, 0.75, 0.75],
        [0.75, 0.25, 0.75],
        [0.75, 0.75, 0.25],
    ];
    let coords = basis
        .iter()
        .map(|b| Vector3D::new(b[0] * a, b[1] * a, b[2] * a))
        .collect();
    Configuration::new(["Si"; 8], coords, Cell::cubic(a), [true; 3]).unwrap()
}

#[test]
fn test_extxyz_file_builds_same_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("silicon.xyz");
    fs::write(&path, SILICON).unwrap();

    let from_file = read_configuration(&path).unwrap();
    assert_eq!(from_file.identifier.as_deref(), Some(path.display().to_string().as_str()));

    let cutoffs = CutoffSpec::from_pairs([("Si-Si", 2.5)]).unwrap();
    let read = NeighborList::new(&from_file, &cutoffs).unwrap();
    let built = NeighborList::new(&silicon_by_hand(), &cutoffs).unwrap();

    // diamond: four nearest neighbors at a * sqrt(3) / 4
    assert_eq!(read.neighbor_counts(), [4; 8]);
    assert_eq!(read.neighbor_counts(), built.neighbor_counts());
    for i in 0..read.ncontrib() {
        assert_eq!(read.neighbors_of(i).unwrap(), built.neighbors_of(i).unwrap());
    }
}

#[test]
fn test_json_file_builds_same_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("silicon.json");
    let conf = silicon_by_hand();
    write_json(&conf, &path).unwrap();

    let read = read_configuration(&path).unwrap();
    assert_eq!(read.species(), conf.species());
    assert_eq!(read.pbc(), conf.pbc());

    let cutoffs = CutoffSpec::from_pairs([("Si-Si", 4.0)]).unwrap();
    assert_eq!(
        NeighborList::new(&read, &cutoffs).unwrap().neighbor_counts(),
        NeighborList::new(&conf, &cutoffs).unwrap().neighbor_counts()
    );
}

#[test]
fn test_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("silicon.cif");
    fs::write(&path, SILICON).unwrap();
    assert!(matches!(
        read_configuration(&path),
        Err(IoError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_batch_matches_individual_builds() {
    let base = silicon_by_hand();
    let configs: Vec<Configuration> = (0..6)
        .map(|k| base.translated(Vector3D::new(0.37 * k as f64, -0.11 * k as f64, 0.05)))
        .collect();
    let cutoffs = CutoffSpec::from_pairs([("Si-Si", 3.9)]).unwrap();

    let parallel = build_all(&configs, &cutoffs, NeighborOptions::default());
    let serial = build_all(&configs, &cutoffs, NeighborOptions::default().serial());
    assert_eq!(parallel.len(), configs.len());

    for ((conf, p), s) in configs.iter().zip(&parallel).zip(&serial) {
        let single = NeighborList::new(conf, &cutoffs).unwrap();
        let p = p.as_ref().unwrap();
        let s = s.as_ref().unwrap();
        assert_eq!(p.neighbor_counts(), single.neighbor_counts());
        for i in 0..single.ncontrib() {
            assert_eq!(p.neighbors_of(i).unwrap(), single.neighbors_of(i).unwrap());
            assert_eq!(s.neighbors_of(i).unwrap(), single.neighbors_of(i).unwrap());
        }
    }
}
