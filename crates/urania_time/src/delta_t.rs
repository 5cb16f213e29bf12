//! ΔT = TD − UT estimators.
//!
//! Each [`DeltaTMethod`] is a pure function of the date. Every method except
//! the default has a documented validity window; outside it the method hands
//! the date to [`DeltaTMethod::EspenakMeeus`], which covers all of time with
//! contiguous piecewise polynomials. Accuracy outside a method's own window
//! is therefore that of the default, not of the method itself.
//!
//! Polynomials take `t` in Julian centuries measured from 12:00 on
//! January 1 of a per-range epoch year.

use crate::calendar::CalendarDate;
use crate::delta_t_tables::{ANNUAL, QUINQUENNIAL, TABLE_FIRST_YEAR, TABLE_LAST_YEAR};
use crate::error::TimeError;
use crate::julian::{DAYS_PER_JULIAN_CENTURY, JulianDate, calendar_to_jd};

/// Half-open range of calendar years `[start, end)`; `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearWindow {
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    pub const fn new(start: i32, end: i32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start.is_none_or(|s| year >= s) && self.end.is_none_or(|e| year < e)
    }
}

impl std::fmt::Display for YearWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "all years"),
            (Some(s), None) => write!(f, "{s} onward"),
            (None, Some(e)) => write!(f, "before {e}"),
            (Some(s), Some(e)) => write!(f, "{s} to {}", e - 1),
        }
    }
}

/// Published ΔT approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeltaTMethod {
    /// Espenak & Meeus (2006) piecewise polynomials. Total over all dates.
    #[default]
    EspenakMeeus,
    /// Espenak's quadratic around J2000.
    Espenak,
    /// Meeus, *Astronomical Algorithms* ch. 10 (methods 1–4).
    Meeus,
    /// Five-yearly table, 1620–2010.
    Chapront,
    /// Borkowski's quadratic for ancient and medieval dates.
    Borkowski,
}

impl DeltaTMethod {
    pub const fn all() -> [Self; 5] {
        [
            Self::EspenakMeeus,
            Self::Espenak,
            Self::Meeus,
            Self::Chapront,
            Self::Borkowski,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::EspenakMeeus => "espenak-meeus",
            Self::Espenak => "espenak",
            Self::Meeus => "meeus",
            Self::Chapront => "chapront",
            Self::Borkowski => "borkowski",
        }
    }

    /// Calendar years over which the method's own formula is used.
    pub const fn validity(self) -> YearWindow {
        match self {
            Self::EspenakMeeus | Self::Meeus => YearWindow::UNBOUNDED,
            Self::Espenak => YearWindow::new(1950, 2100),
            Self::Chapront => YearWindow::new(TABLE_FIRST_YEAR, TABLE_LAST_YEAR + 1),
            Self::Borkowski => YearWindow::new(-2000, 1700),
        }
    }

    /// ΔT in seconds for `date`.
    pub fn delta_t(self, date: &JulianDate) -> f64 {
        if !self.validity().contains(date.year()) {
            log::debug!(
                "{} outside {} for year {}, using {}",
                self.name(),
                self.validity(),
                date.year(),
                Self::EspenakMeeus.name()
            );
            return espenak_meeus(date);
        }
        match self {
            Self::EspenakMeeus => espenak_meeus(date),
            Self::Espenak => espenak(date),
            Self::Meeus => meeus(date),
            Self::Chapront => chapront(date),
            Self::Borkowski => borkowski(date),
        }
    }
}

impl std::fmt::Display for DeltaTMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DeltaTMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown Delta-T method: {s}"))
    }
}

/// Julian centuries from 12:00 on January 1 of `epoch_year`.
fn centuries_from(date: &JulianDate, epoch_year: i32) -> f64 {
    let epoch = calendar_to_jd(&CalendarDate::new(epoch_year, 1, 1, 12, 0, 0.0));
    (date.jd() - epoch) / DAYS_PER_JULIAN_CENTURY
}

/// Horner evaluation, coefficients in ascending powers.
fn poly(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Espenak & Meeus piecewise polynomials.
pub fn espenak_meeus(date: &JulianDate) -> f64 {
    let year = date.year();
    if year < -500 {
        let u = centuries_from(date, 1820);
        -20.0 + 32.0 * u * u
    } else if year < 500 {
        let t = year as f64 / 100.0;
        poly(
            t,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        )
    } else if year < 1600 {
        let t = centuries_from(date, 1000);
        poly(
            t,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        )
    } else if year < 1700 {
        let t = centuries_from(date, 1600);
        120.0 - 98.08 * t - 153.2 * t * t + t * t * t / 0.007129
    } else if year < 1800 {
        let t = centuries_from(date, 1700);
        8.83 + 16.03 * t - 59.285 * t * t + 133.36 * t.powi(3) - t.powi(4) / 0.01174
    } else if year < 1860 {
        let t = centuries_from(date, 1800);
        poly(
            t,
            &[
                13.72, -33.2447, 68.612, 4111.6, -37436.0, 121272.0, -169900.0, 87500.0,
            ],
        )
    } else if year < 1900 {
        let t = centuries_from(date, 1860);
        poly(t, &[7.62, 57.37, -2517.54, 16806.68, -44736.24]) + t.powi(5) / 0.0000233174
    } else if year < 1920 {
        let t = centuries_from(date, 1900);
        poly(t, &[-2.79, 149.4119, -598.939, 6196.6, -19700.0])
    } else if year < 1941 {
        let t = centuries_from(date, 1920);
        poly(t, &[21.20, 84.493, -761.00, 2093.6])
    } else if year < 1961 {
        let t = centuries_from(date, 1950);
        29.07 + 40.7 * t - t * t / 0.0233 + t.powi(3) / 0.002547
    } else if year < 1986 {
        let t = centuries_from(date, 1975);
        45.45 + 106.7 * t - t * t / 0.026 - t.powi(3) / 0.000718
    } else if year < 2005 {
        let t = centuries_from(date, 2000);
        poly(t, &[63.86, 33.45, -603.74, 1727.5, 65181.4, 237359.9])
    } else if year < 2050 {
        let t = centuries_from(date, 2000);
        poly(t, &[62.92, 32.217, 55.89])
    } else if year < 2150 {
        let t = centuries_from(date, 1820);
        -205.72 + 56.28 * t + 32.0 * t * t
    } else {
        let u = centuries_from(date, 1820);
        -20.0 + 32.0 * u * u
    }
}

/// Espenak's quadratic: 67 + 61t + 64.3t², t from J2000.
pub fn espenak(date: &JulianDate) -> f64 {
    let t = date.centuries_since_j2000();
    67.0 + 61.0 * t + 64.3 * t * t
}

/// Borkowski's quadratic: 35(t + 3.75)² + 40, t from J2000.
pub fn borkowski(date: &JulianDate) -> f64 {
    let t = date.centuries_since_j2000() + 3.75;
    35.0 * t * t + 40.0
}

/// Meeus methods 1–4, selected by year.
pub fn meeus(date: &JulianDate) -> f64 {
    let year = date.year();
    let t = date.centuries_since_j2000();
    let method_two = 102.0 + 102.0 * t + 25.3 * t * t;
    if year < 948 {
        2177.0 + 497.0 * t + 44.1 * t * t
    } else if year < TABLE_FIRST_YEAR {
        method_two
    } else if year < 2000 {
        match meeus_table_delta_t(year) {
            Ok(dt) => dt,
            Err(_) => espenak_meeus(date),
        }
    } else if year < 2100 {
        method_two + 0.37 * (year - 2100) as f64
    } else {
        method_two
    }
}

/// Five-yearly tabulated value for the date's year.
pub fn chapront(date: &JulianDate) -> f64 {
    match chapront_table_delta_t(date.year()) {
        Ok(dt) => dt,
        Err(_) => espenak_meeus(date),
    }
}

fn check_table_span(year: i32) -> Result<usize, TimeError> {
    if !(TABLE_FIRST_YEAR..=TABLE_LAST_YEAR).contains(&year) {
        return Err(TimeError::DeltaTOutOfRange {
            year,
            first: TABLE_FIRST_YEAR,
            last: TABLE_LAST_YEAR,
        });
    }
    Ok((year - TABLE_FIRST_YEAR) as usize)
}

/// Annual table value for `year` (1620..=2010).
pub fn meeus_table_delta_t(year: i32) -> Result<f64, TimeError> {
    let index = check_table_span(year)?;
    Ok(ANNUAL[index])
}

/// Five-yearly table value for the sample at or before `year` (1620..=2010).
pub fn chapront_table_delta_t(year: i32) -> Result<f64, TimeError> {
    let index = check_table_span(year)? / 5;
    Ok(QUINQUENNIAL[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon_jan_1(year: i32) -> JulianDate {
        JulianDate::new(year, 1, 1, 12, 0, 0.0).unwrap()
    }

    fn assert_close(got: f64, expected: f64, tol: f64, what: &str) {
        assert!(
            (got - expected).abs() < tol,
            "{what}: got {got}, expected {expected} ± {tol}"
        );
    }

    #[test]
    fn espenak_meeus_each_range() {
        let cases = [
            (-600, 18719.971),
            (250, 8163.064),
            (700, 3813.150),
            (1650, 50.192),
            (1750, 13.370),
            (1850, 7.107),
            (1875, -3.088),
            (1910, 10.387),
            (1930, 24.133),
            (1957, 31.844),
            (1964, 35.101),
            (1997, 62.315),
            (2019, 71.059),
            (2060, 113.666),
            (2200, 442.067),
        ];
        for (year, expected) in cases {
            let got = espenak_meeus(&noon_jan_1(year));
            assert_close(got, expected, 0.01, &format!("year {year}"));
        }
    }

    #[test]
    fn espenak_inside_window() {
        let d = JulianDate::from_ymd(1950, 1, 1).unwrap();
        assert_close(DeltaTMethod::Espenak.delta_t(&d), 52.575, 0.01, "1950");
        let d = JulianDate::from_ymd(2090, 1, 1).unwrap();
        assert_close(DeltaTMethod::Espenak.delta_t(&d), 173.983, 0.01, "2090");
    }

    #[test]
    fn borkowski_inside_window() {
        let cases = [(1000, 1407.04, 0.01), (1500, 94.658, 0.01), (1, 9270.40, 0.01)];
        for (year, expected, tol) in cases {
            let d = JulianDate::from_ymd(year, 1, 1).unwrap();
            let got = DeltaTMethod::Borkowski.delta_t(&d);
            assert_close(got, expected, tol, &format!("year {year}"));
        }
    }

    #[test]
    fn meeus_methods() {
        let d = JulianDate::new(333, 2, 6, 6, 0, 0.0).unwrap();
        assert_close(DeltaTMethod::Meeus.delta_t(&d), 6145.59, 0.01, "method 1");
        let d = JulianDate::from_ymd(1000, 5, 18).unwrap();
        assert_close(DeltaTMethod::Meeus.delta_t(&d), 1610.34, 0.01, "method 2");
        let d = noon_jan_1(2007);
        assert_close(DeltaTMethod::Meeus.delta_t(&d), 74.853, 0.01, "method 4");
    }

    #[test]
    fn meeus_table_years() {
        let cases = [(1628, 88.0), (1840, 5.4), (1900, -2.8), (1999, 63.4)];
        for (year, expected) in cases {
            let d = JulianDate::new(year, 1, 11, 12, 0, 0.0).unwrap();
            assert_eq!(DeltaTMethod::Meeus.delta_t(&d), expected, "year {year}");
        }
    }

    #[test]
    fn table_lookups_reject_years_outside_span() {
        assert_eq!(meeus_table_delta_t(1620), Ok(121.0));
        assert_eq!(meeus_table_delta_t(2010), Ok(66.1));
        assert_eq!(
            meeus_table_delta_t(1619),
            Err(TimeError::DeltaTOutOfRange {
                year: 1619,
                first: 1620,
                last: 2010
            })
        );
        assert!(meeus_table_delta_t(2011).is_err());
        // 1616 would truncate to index 0 if only the quotient were checked
        assert!(chapront_table_delta_t(1616).is_err());
        assert!(chapront_table_delta_t(2011).is_err());
    }

    #[test]
    fn chapront_samples_every_fifth_year() {
        assert_eq!(chapront_table_delta_t(1620), Ok(121.0));
        assert_eq!(chapront_table_delta_t(1624), Ok(121.0));
        assert_eq!(chapront_table_delta_t(1840), Ok(5.4));
        assert_eq!(chapront_table_delta_t(1999), Ok(60.8));
        assert_eq!(chapront_table_delta_t(2010), Ok(66.1));
        let d = noon_jan_1(1843);
        assert_eq!(DeltaTMethod::Chapront.delta_t(&d), 5.4);
    }

    #[test]
    fn out_of_window_delegates_to_default() {
        for date in [noon_jan_1(1900), noon_jan_1(2150), noon_jan_1(-2500)] {
            let default = espenak_meeus(&date);
            for method in [DeltaTMethod::Espenak, DeltaTMethod::Borkowski, DeltaTMethod::Chapront] {
                if method.validity().contains(date.year()) {
                    continue;
                }
                assert_eq!(
                    method.delta_t(&date),
                    default,
                    "{method} did not delegate for {}",
                    date.year()
                );
            }
        }
    }

    #[test]
    fn windows_and_names() {
        assert!(DeltaTMethod::Espenak.validity().contains(1950));
        assert!(!DeltaTMethod::Espenak.validity().contains(2100));
        assert!(DeltaTMethod::Borkowski.validity().contains(-2000));
        assert!(!DeltaTMethod::Borkowski.validity().contains(1700));
        assert!(DeltaTMethod::Chapront.validity().contains(2010));
        assert!(DeltaTMethod::EspenakMeeus.validity().contains(i32::MIN));
        assert_eq!(DeltaTMethod::default(), DeltaTMethod::EspenakMeeus);
        for method in DeltaTMethod::all() {
            assert_eq!(method.name().parse::<DeltaTMethod>(), Ok(method));
        }
        assert!("nope".parse::<DeltaTMethod>().is_err());
        assert_eq!(DeltaTMethod::Espenak.validity().to_string(), "1950 to 2099");
    }

    #[test]
    fn default_is_continuous_enough_at_range_edges() {
        // Adjacent polynomials are fitted to agree within a few seconds.
        for year in [1600, 1700, 1800, 1860, 1900, 1920, 1941, 1961, 1986, 2005] {
            let before = JulianDate::new(year - 1, 12, 31, 12, 0, 0.0).unwrap();
            let after = noon_jan_1(year);
            let jump = (espenak_meeus(&after) - espenak_meeus(&before)).abs();
            assert!(jump < 3.0, "jump of {jump}s at {year}");
        }
    }
}
