//! Loading series files from a directory tree written by the test.

use std::fs;
use std::path::{Path, PathBuf};

use urania_bodies::{Axis, BodyError, Planet, Vsop87, VsopConfig, VsopVariant};
use urania_time::JulianDate;

struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("urania-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn path(&self) -> &Path {
        &self.0
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.0.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn loads_present_orders_and_skips_missing_ones() {
    let dir = ScratchDir::new("load");
    dir.write("vsop87a/mars/x0.data", "1.5 0 0\n");
    dir.write("vsop87a/mars/x1.data", "2.0 0\n0\n");
    dir.write("vsop87a/mars/y0.data", "0.5 0 0 0.25 0 0\n");
    dir.write("vsop87a/mars/z3.data", "1.0 0 0\n");

    let config = VsopConfig::new(dir.path(), VsopVariant::Rectangular);
    let table = config.load(&[Planet::Mars]).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.term_count(), 5);

    let theory = Vsop87::new(table);
    // t = 0.5 millennia
    let date = JulianDate::from_jd(2_451_545.0 + 182_625.0).unwrap();
    let p = theory.rectangular(Planet::Mars, &date).unwrap();
    assert!((p.x - 2.5).abs() < 1e-12, "x = {}", p.x);
    assert!((p.y - 0.75).abs() < 1e-12, "y = {}", p.y);
    assert!((p.z - 0.125).abs() < 1e-12, "z = {}", p.z);
}

#[test]
fn coordinate_without_any_file_is_missing() {
    let dir = ScratchDir::new("missing");
    dir.write("vsop87b/venus/l0.data", "1 0 0");
    dir.write("vsop87b/venus/b0.data", "0 0 0");

    let config = VsopConfig::new(dir.path(), VsopVariant::Spherical);
    let err = config.load(&[Planet::Venus]).unwrap_err();
    assert_eq!(
        err,
        BodyError::MissingSeries {
            planet: "venus",
            axis: 'r'
        }
    );
}

#[test]
fn parse_error_names_file_and_line() {
    let dir = ScratchDir::new("parse");
    dir.write("vsop87b/earth/l0.data", "1 0 0\n1 0 0\n1 x 0\n");

    let config = VsopConfig::new(dir.path(), VsopVariant::Spherical);
    match config.load(&[Planet::Earth]).unwrap_err() {
        BodyError::SeriesParse { path, line, .. } => {
            assert!(path.ends_with("vsop87b/earth/l0.data"), "{}", path.display());
            assert_eq!(line, 3);
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn nonexistent_root_is_invalid() {
    let config = VsopConfig::new(
        std::env::temp_dir().join("urania-no-such-root"),
        VsopVariant::Spherical,
    );
    assert!(matches!(
        config.load(&[Planet::Earth]),
        Err(BodyError::InvalidConfig(_))
    ));
}

#[test]
fn axis_letters_match_file_names() {
    let letters: String = VsopVariant::Spherical
        .axes()
        .iter()
        .chain(VsopVariant::Rectangular.axes().iter())
        .map(|a: &Axis| a.letter())
        .collect();
    assert_eq!(letters, "lbrxyz");
}
