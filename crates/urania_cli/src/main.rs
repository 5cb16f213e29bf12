use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{ArgAction, Parser, Subcommand};
use urania_bodies::{LunarPosition, LunarTheory, Planet, Vsop87, VsopConfig, VsopVariant};
use urania_frames::{Nutation, Site};
use urania_math::{deg_to_dms, hours_to_hms};
use urania_time::{
    CalendarDate, DeltaTMethod, JulianDate, ObservableJulianDate, TimeSpan, Tracked, gmst_deg,
    gmst_hms, local_mean_sidereal_deg,
};

#[derive(Parser)]
#[command(name = "urania", about = "Positional astronomy after Meeus and VSOP87")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day Number of a calendar date
    Jd {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss)
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// ΔT method for the dynamical-time line
        #[arg(long, default_value = "espenak-meeus")]
        method: DeltaTMethod,
    },
    /// Calendar date of a Julian Day Number
    Calendar {
        jd: f64,
    },
    /// ΔT = TD − UT in seconds
    DeltaT {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss)
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// Single method; every method when omitted
        #[arg(long)]
        method: Option<DeltaTMethod>,
    },
    /// Nutation and obliquity of the ecliptic
    Nutation {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss), dynamical time
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Geocentric position of the Moon
    Moon {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss), dynamical time
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// Number of further dates to print
        #[arg(long, default_value = "0")]
        steps: u32,
        /// Days between dates
        #[arg(long, default_value = "1.0")]
        step_days: f64,
    },
    /// Greenwich (or local) mean sidereal time
    Gmst {
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss), universal time
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// East longitude in degrees for local sidereal time
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Geocentric latitude and parallax constants of an observer
    Site {
        /// Geographic latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// East longitude in degrees
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        lon: f64,
        /// Height above sea level in metres
        #[arg(long, default_value = "0")]
        alt: f64,
        #[arg(long, default_value = "site")]
        name: String,
    },
    /// Apparent geocentric place of a planet from VSOP87B series
    Planet {
        /// Planet name (mercury, venus, mars, jupiter, saturn, uranus, neptune)
        planet: Planet,
        /// Date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss), dynamical time
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// Root directory of the VSOP87 `.data` series
        #[arg(long, env = "URANIA_VSOP_DIR")]
        data_dir: PathBuf,
    },
    /// Length of the interval between two dates
    Span {
        from: String,
        to: String,
    },
    /// Convert decimal degrees to D/M/S
    Dms {
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

/// Parse "YYYY-MM-DD", "YYYY-MM-DDThh:mm" or "YYYY-MM-DDThh:mm:ss".
/// A leading '-' marks a year before 1 BCE in astronomical numbering.
fn parse_date(s: &str) -> Result<CalendarDate, String> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (date, time) = match body.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (body, None),
    };
    let date_parts: Vec<&str> = date.split('-').collect();
    if date_parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD[Thh:mm[:ss]], got {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("year: {e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("month: {e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("day: {e}"))?;
    let year = if negative { -year } else { year };

    let (hour, minute, second) = match time {
        None => (0, 0, 0.0),
        Some(t) => {
            let parts: Vec<&str> = t.trim_end_matches('Z').split(':').collect();
            if !(2..=3).contains(&parts.len()) {
                return Err(format!("invalid time of day: {t}"));
            }
            let hour: u32 = parts[0].parse().map_err(|e| format!("hour: {e}"))?;
            let minute: u32 = parts[1].parse().map_err(|e| format!("minute: {e}"))?;
            let second: f64 = match parts.get(2) {
                Some(sec) => sec.parse().map_err(|e| format!("second: {e}"))?,
                None => 0.0,
            };
            (hour, minute, second)
        }
    };
    Ok(CalendarDate::new(year, month, day, hour, minute, second))
}

fn require_date(s: &str) -> JulianDate {
    parse_date(s)
        .and_then(|c| JulianDate::from_calendar(c).map_err(|e| e.to_string()))
        .unwrap_or_else(|e| {
            eprintln!("Invalid date {s}: {e}");
            std::process::exit(1);
        })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn print_moon(moon: &LunarPosition, date: &JulianDate) {
    println!("{}", date);
    println!(
        "  λ {:.6}°  β {:.6}°  Δ {:.1} km  π {:.6}°",
        moon.apparent_longitude, moon.latitude, moon.distance_km, moon.parallax
    );
    println!("  {}", moon.radec);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Jd { date, method } => {
            let jd = require_date(&date);
            let jde = jd.to_dynamical(method);
            println!("JD  {:.6}", jd.jd());
            println!("T   {:.12} centuries from J2000.0", jd.centuries_since_j2000());
            println!("JDE {:.6} (ΔT by {method})", jde.jd());
        }

        Commands::Calendar { jd } => match JulianDate::from_jd(jd) {
            Ok(date) => println!("{}", date.calendar()),
            Err(e) => {
                eprintln!("Invalid Julian Day Number: {e}");
                std::process::exit(1);
            }
        },

        Commands::DeltaT { date, method } => {
            let date = require_date(&date);
            let methods = match method {
                Some(m) => vec![m],
                None => DeltaTMethod::all().to_vec(),
            };
            for m in methods {
                let window = m.validity();
                let marker = if window.contains(date.year()) { "" } else { " (delegated)" };
                println!(
                    "{:<14} {:>12.3} s  valid {window}{marker}",
                    m.name(),
                    m.delta_t(&date)
                );
            }
        }

        Commands::Nutation { date } => {
            let date = require_date(&date);
            let n = Nutation::compute(&date);
            println!("Δψ {:+.5}″", n.longitude_arcsec);
            println!("Δε {:+.5}″", n.obliquity_arcsec);
            println!("ε0 {}", deg_to_dms(n.mean_obliquity_deg));
            println!("ε  {}", deg_to_dms(n.true_obliquity_deg));
        }

        Commands::Moon {
            date,
            steps,
            step_days,
        } => {
            let start = require_date(&date);
            let tracked = Rc::new(RefCell::new(Tracked::new(&start, |d| {
                LunarTheory::default().compute(d)
            })));
            let mut observable = ObservableJulianDate::new(start);
            let sink = Rc::clone(&tracked);
            observable.subscribe(move |_, new| {
                sink.borrow_mut().refresh(new);
            });

            print_moon(tracked.borrow().value(), observable.date());
            for _ in 0..steps {
                if let Err(e) = observable.advance_days(step_days) {
                    eprintln!("Cannot advance date: {e}");
                    std::process::exit(1);
                }
                print_moon(tracked.borrow().value(), observable.date());
            }
        }

        Commands::Gmst { date, lon } => {
            let date = require_date(&date);
            let deg = gmst_deg(&date);
            println!("GMST {:.8}°  {}", deg, gmst_hms(&date));
            if let Some(lon) = lon {
                let local = local_mean_sidereal_deg(&date, lon);
                println!("LMST {:.8}°  {}", local, hours_to_hms(local / 15.0));
            }
        }

        Commands::Site {
            lat,
            lon,
            alt,
            name,
        } => {
            let site = Site::new(name, lat, lon, alt);
            println!(
                "{}: φ {:.6}°  λ {:.6}°  h {:.1} m",
                site.name(),
                site.latitude_deg(),
                site.longitude_deg(),
                site.altitude_m()
            );
            println!("φ′        {:.10}°", site.geocentric_latitude_deg());
            println!("ρ sin φ′  {:+.10}", site.rho_sin_phi());
            println!("ρ cos φ′  {:+.10}", site.rho_cos_phi());
        }

        Commands::Planet {
            planet,
            date,
            data_dir,
        } => {
            let date = require_date(&date);
            let config = VsopConfig::new(data_dir, VsopVariant::Spherical);
            let table = config.load(&[Planet::Earth, planet]).unwrap_or_else(|e| {
                eprintln!("Failed to load VSOP87 series: {e}");
                std::process::exit(1);
            });
            let theory = Vsop87::new(table);
            let pos = theory.apparent(planet, &date).unwrap_or_else(|e| {
                eprintln!("Failed to compute {planet}: {e}");
                std::process::exit(1);
            });
            println!("{planet} at {date}");
            println!("  light-time {:.6} d  Δ {:.6} AU", pos.light_time_days, pos.distance_au);
            println!(
                "  geometric λ {:.6}°  β {:.6}°",
                pos.geometric_longitude, pos.geometric_latitude
            );
            println!("  apparent  λ {:.6}°  β {:.6}°", pos.longitude, pos.latitude);
            println!("  {}", pos.radec);
        }

        Commands::Span { from, to } => {
            let span = TimeSpan::between(require_date(&from), require_date(&to));
            println!("{:.6} days", span.length_days());
            println!(
                "{} days, {} weeks, {} months, {} years, {} decades, {} centuries",
                span.days(),
                span.weeks(),
                span.months(),
                span.years(),
                span.decades(),
                span.centuries()
            );
        }

        Commands::Dms { deg } => {
            println!("{}", deg_to_dms(deg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_only() {
        let d = parse_date("1987-04-10").unwrap();
        assert_eq!((d.year, d.month, d.day, d.hour), (1987, 4, 10, 0));
    }

    #[test]
    fn parses_time_of_day() {
        let d = parse_date("1987-04-10T19:21:00Z").unwrap();
        assert_eq!((d.hour, d.minute), (19, 21));
        let d = parse_date("837-04-10T07:36").unwrap();
        assert_eq!((d.year, d.minute, d.second), (837, 36, 0.0));
    }

    #[test]
    fn parses_negative_year() {
        let d = parse_date("-600-01-01T12:00:00").unwrap();
        assert_eq!(d.year, -600);
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_date("1987/04/10").is_err());
        assert!(parse_date("1987-04-10T19").is_err());
        assert!(parse_date("1987-xx-10").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn planet_argument_parses() {
        let cli = Cli::try_parse_from([
            "urania",
            "planet",
            "venus",
            "1992-12-20",
            "--data-dir",
            "/tmp/vsop",
        ])
        .unwrap();
        match cli.command {
            Commands::Planet { planet, .. } => assert_eq!(planet, Planet::Venus),
            _ => panic!("wrong subcommand"),
        }
    }
}
