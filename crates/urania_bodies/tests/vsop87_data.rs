//! VSOP87 against reference values.
//!
//! Data root: `$URANIA_VSOP_DIR`, else the bundled `tests/data` tree holding
//! the complete VSOP87A Earth and Jupiter and VSOP87B Earth and Venus series.

use std::path::PathBuf;

use urania_bodies::{Planet, SeriesTable, Vsop87, VsopConfig, VsopVariant};
use urania_time::JulianDate;

fn data_dir() -> PathBuf {
    match std::env::var_os("URANIA_VSOP_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data"),
    }
}

fn load(variant: VsopVariant, planets: &[Planet]) -> Option<Vsop87<SeriesTable>> {
    let config = VsopConfig::new(data_dir(), variant);
    if !config.planet_dir(planets[0]).is_dir() {
        eprintln!("Skipping: {} series not found", variant.dir_name());
        return None;
    }
    Some(Vsop87::new(config.load(planets).expect("series should load")))
}

fn assert_xyz(got: [f64; 3], expected: [f64; 3], what: &str) {
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-10, "{what}: {got:?}, expected {expected:?}");
    }
}

#[test]
fn earth_rectangular() {
    let Some(theory) = load(VsopVariant::Rectangular, &[Planet::Earth]) else {
        return;
    };
    let cases = [
        (2_451_545.0, [-0.177_135_458_6, 0.967_241_623_7, -0.000_003_900_0]),
        (2_415_020.0, [-0.188_307_964_9, 0.965_068_884_4, 0.000_215_032_5]),
        (2_378_495.0, [-0.199_391_800_2, 0.962_797_436_8, 0.000_430_760_2]),
    ];
    for (jd, expected) in cases {
        let p = theory
            .rectangular(Planet::Earth, &JulianDate::from_jd(jd).unwrap())
            .unwrap();
        assert_xyz([p.x, p.y, p.z], expected, &format!("Earth at JD {jd}"));
    }
}

#[test]
fn jupiter_rectangular() {
    let Some(theory) = load(VsopVariant::Rectangular, &[Planet::Jupiter]) else {
        return;
    };
    let p = theory
        .rectangular(Planet::Jupiter, &JulianDate::j2000())
        .unwrap();
    assert_xyz(
        [p.x, p.y, p.z],
        [4.001_174_026_8, 2.938_581_007_7, -0.101_783_750_1],
        "Jupiter at J2000",
    );
}

#[test]
fn earth_spherical() {
    let Some(theory) = load(VsopVariant::Spherical, &[Planet::Earth]) else {
        return;
    };
    let s = theory.spherical(Planet::Earth, &JulianDate::j2000()).unwrap();
    assert_xyz(
        [s.longitude, s.latitude, s.radius],
        [1.751_923_863_7, -0.000_003_965_6, 0.983_327_682_3],
        "Earth L, B, R at J2000",
    );
}

#[test]
fn venus_apparent_place_is_plausible() {
    let Some(theory) = load(VsopVariant::Spherical, &[Planet::Earth, Planet::Venus]) else {
        return;
    };
    // 1992-12-20 0h TD
    let date = JulianDate::from_jd(2_448_976.5).unwrap();
    let pos = theory.apparent(Planet::Venus, &date).unwrap();
    assert!((pos.distance_au - 0.910_845).abs() < 1e-3, "Δ = {}", pos.distance_au);
    assert!((pos.light_time_days - 0.005_260_6).abs() < 1e-5, "τ = {}", pos.light_time_days);
    // VSOP87B is referred to the J2000 equinox, about 0.1° of precession
    // away from the equinox of date used in the textbook example.
    assert!((pos.longitude - 313.18).abs() < 0.05, "λ = {}", pos.longitude);
    assert!((pos.latitude + 2.085).abs() < 0.05, "β = {}", pos.latitude);
}
