//! Tabulated ΔT values in seconds.
//!
//! The annual table runs from 1620 through 2010 (Meeus, *Astronomical
//! Algorithms*, table 10.A, extended with observed values). The
//! quinquennial table samples it every five years over the same span.

/// First tabulated year of both tables.
pub(crate) const TABLE_FIRST_YEAR: i32 = 1620;

/// Last tabulated year of both tables.
pub(crate) const TABLE_LAST_YEAR: i32 = 2010;

#[rustfmt::skip]
pub(crate) static ANNUAL: [f64; 391] = [
    121.00, 116.50, 112.00, 107.50, 103.00, 99.00, 95.00, 91.50, 88.00, 85.00,  // 1620
    82.00, 79.50, 77.00, 74.50, 72.00, 70.00, 68.00, 65.50, 63.00, 61.50,  // 1630
    60.00, 58.00, 56.00, 54.50, 53.00, 52.00, 51.00, 49.50, 48.00, 47.00,  // 1640
    46.00, 45.00, 44.00, 43.00, 42.00, 41.00, 40.00, 39.00, 38.00, 36.50,  // 1650
    35.00, 34.00, 33.00, 32.00, 31.00, 30.00, 29.00, 27.50, 26.00, 25.00,  // 1660
    24.00, 23.00, 22.00, 21.00, 20.00, 19.00, 18.00, 17.00, 16.00, 15.00,  // 1670
    14.00, 13.00, 12.00, 11.50, 11.00, 10.50, 10.00, 9.50, 9.00, 8.50,  // 1680
    8.00, 7.50, 7.00, 7.00, 7.00, 7.00, 7.00, 7.00, 7.00, 7.00,  // 1690
    7.00, 7.00, 7.00, 7.50, 8.00, 8.00, 8.00, 8.50, 9.00, 9.00,  // 1700
    9.00, 9.00, 9.00, 9.00, 9.00, 9.00, 9.00, 9.50, 10.00, 10.00,  // 1710
    10.00, 10.00, 10.00, 10.00, 10.00, 10.00, 10.00, 10.00, 10.00, 10.00,  // 1720
    10.00, 10.00, 10.00, 10.50, 11.00, 11.00, 11.00, 11.00, 11.00, 11.00,  // 1730
    11.00, 11.50, 12.00, 12.00, 12.00, 12.00, 12.00, 12.00, 12.00, 12.00,  // 1740
    12.00, 12.50, 13.00, 13.00, 13.00, 13.00, 13.00, 13.50, 14.00, 14.00,  // 1750
    14.00, 14.00, 14.00, 14.00, 14.00, 14.50, 15.00, 15.00, 15.00, 15.00,  // 1760
    15.00, 15.00, 15.00, 15.00, 15.00, 15.50, 16.00, 16.00, 16.00, 16.00,  // 1770
    16.00, 16.00, 16.00, 16.00, 16.00, 16.00, 16.00, 16.00, 16.00, 16.00,  // 1780
    16.00, 15.50, 15.00, 15.00, 15.00, 14.50, 14.00, 13.50, 13.00, 13.05,  // 1790
    13.10, 12.80, 12.50, 12.35, 12.20, 12.10, 12.00, 12.00, 12.00, 12.00,  // 1800
    12.00, 12.00, 12.00, 12.00, 12.00, 12.00, 12.00, 11.95, 11.90, 11.75,  // 1810
    11.60, 11.30, 11.00, 10.60, 10.20, 9.70, 9.20, 8.70, 8.20, 7.65,  // 1820
    7.10, 6.65, 6.20, 5.90, 5.60, 5.50, 5.40, 5.35, 5.30, 5.35,  // 1830
    5.40, 5.50, 5.60, 5.75, 5.90, 6.05, 6.20, 6.35, 6.50, 6.65,  // 1840
    6.80, 6.95, 7.10, 7.20, 7.30, 7.40, 7.50, 7.55, 7.60, 7.65,  // 1850
    7.70, 7.50, 7.30, 6.75, 6.20, 5.70, 5.20, 3.95, 2.70, 2.05,  // 1860
    1.40, 0.10, -1.20, -2.00, -2.80, -3.30, -3.80, -4.30, -4.80, -5.15,  // 1870
    -5.50, -5.40, -5.30, -5.45, -5.60, -5.65, -5.70, -5.80, -5.90, -5.95,  // 1880
    -6.00, -6.15, -6.30, -6.40, -6.50, -6.35, -6.20, -5.45, -4.70, -3.75,  // 1890
    -2.80, -1.45, -0.10, 1.25, 2.60, 3.95, 5.30, 6.50, 7.70, 9.05,  // 1900
    10.40, 11.85, 13.30, 14.65, 16.00, 17.10, 18.20, 19.20, 20.20, 20.65,  // 1910
    21.10, 21.75, 22.40, 22.95, 23.50, 23.65, 23.80, 24.05, 24.30, 24.15,  // 1920
    24.00, 23.95, 23.90, 23.90, 23.90, 23.80, 23.70, 23.85, 24.00, 24.15,  // 1930
    24.30, 24.80, 25.30, 25.75, 26.20, 26.75, 27.30, 27.75, 28.20, 28.65,  // 1940
    29.10, 29.55, 30.00, 30.35, 30.70, 31.05, 31.40, 31.80, 32.20, 32.65,  // 1950
    33.10, 33.55, 34.00, 34.50, 35.00, 35.75, 36.50, 37.40, 38.30, 39.25,  // 1960
    40.20, 41.20, 42.20, 43.35, 44.50, 45.50, 46.50, 47.50, 48.50, 49.50,  // 1970
    50.50, 51.35, 52.20, 53.00, 53.80, 54.35, 54.90, 55.35, 55.80, 56.35,  // 1980
    56.90, 57.60, 58.30, 59.15, 60.00, 60.80, 61.60, 62.30, 63.00, 63.40,  // 1990
    63.80, 64.05, 64.30, 64.45, 64.60, 64.70, 64.80, 65.15, 65.50, 65.80,  // 2000
    66.10,  // 2010
];

#[rustfmt::skip]
pub(crate) static QUINQUENNIAL: [f64; 79] = [
    121.00, 99.00, 82.00, 70.00, 60.00, 52.00, 46.00, 41.00, 35.00, 30.00,  // 1620
    24.00, 19.00, 14.00, 10.50, 8.00, 7.00, 7.00, 8.00, 9.00, 9.00,  // 1670
    10.00, 10.00, 10.00, 11.00, 11.00, 12.00, 12.00, 13.00, 14.00, 14.50,  // 1720
    15.00, 15.50, 16.00, 16.00, 16.00, 14.50, 13.10, 12.10, 12.00, 12.00,  // 1770
    11.60, 9.70, 7.10, 5.50, 5.40, 6.05, 6.80, 7.40, 7.70, 5.70,  // 1820
    1.40, -3.30, -5.50, -5.65, -6.00, -6.35, -2.80, 3.95, 10.40, 17.10,  // 1870
    21.10, 23.65, 24.00, 23.80, 24.30, 26.75, 29.10, 31.05, 33.10, 35.75,  // 1920
    40.20, 45.50, 50.50, 54.35, 56.90, 60.80, 63.80, 64.70, 66.10,  // 1970
];
