//! Read VSOP87 series from `.data` files.
//!
//! Layout under the data root:
//!
//! ```text
//! <data_dir>/vsop87a/<planet>/x0.data … z5.data
//! <data_dir>/vsop87b/<planet>/l0.data … r5.data
//! ```
//!
//! A file holds whitespace-separated `A B C` triples. Line breaks carry no
//! meaning, so a triple may span lines. A missing order file is an empty
//! series; a coordinate with no files at all is `MissingSeries`.

use std::path::{Path, PathBuf};

use urania_math::VsopTerm;

use super::{Axis, MAX_ORDER, Planet, SeriesTable, VsopVariant};
use crate::error::BodyError;

/// Where to find series files and which variant to read.
#[derive(Debug, Clone, PartialEq)]
pub struct VsopConfig {
    pub data_dir: PathBuf,
    pub variant: VsopVariant,
}

impl VsopConfig {
    pub fn new(data_dir: impl Into<PathBuf>, variant: VsopVariant) -> Self {
        Self {
            data_dir: data_dir.into(),
            variant,
        }
    }

    pub fn validate(&self) -> Result<(), BodyError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(BodyError::InvalidConfig("data_dir must not be empty"));
        }
        if !self.data_dir.is_dir() {
            return Err(BodyError::InvalidConfig("data_dir is not a directory"));
        }
        Ok(())
    }

    /// Directory holding one planet's files for this variant.
    pub fn planet_dir(&self, planet: Planet) -> PathBuf {
        self.data_dir
            .join(self.variant.dir_name())
            .join(planet.name())
    }

    pub fn series_path(&self, planet: Planet, axis: Axis, order: usize) -> PathBuf {
        self.planet_dir(planet)
            .join(format!("{}{order}.data", axis.letter()))
    }

    /// Load every order of every coordinate of `planets`.
    pub fn load(&self, planets: &[Planet]) -> Result<SeriesTable, BodyError> {
        self.validate()?;
        let mut table = SeriesTable::new();
        for &planet in planets {
            for axis in self.variant.axes() {
                for order in 0..=MAX_ORDER {
                    let path = self.series_path(planet, axis, order);
                    if let Some(terms) = load_series_file(&path)? {
                        log::trace!("{}: {} terms", path.display(), terms.len());
                        table.insert(planet, axis, order, terms);
                    }
                }
                if !table.has_axis(planet, axis) {
                    return Err(BodyError::MissingSeries {
                        planet: planet.name(),
                        axis: axis.letter(),
                    });
                }
            }
        }
        log::debug!(
            "loaded {} {} series ({} terms) from {}",
            table.len(),
            self.variant.dir_name(),
            table.term_count(),
            self.data_dir.display()
        );
        Ok(table)
    }
}

/// Read one series file. `Ok(None)` when the file does not exist.
pub fn load_series_file(path: &Path) -> Result<Option<Vec<VsopTerm>>, BodyError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_series(&content, path).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no series file {}, treating as empty", path.display());
            Ok(None)
        }
        Err(e) => Err(BodyError::Io(format!("{}: {e}", path.display()))),
    }
}

/// Parse `A B C` triples. `path` only labels errors.
pub fn parse_series(content: &str, path: &Path) -> Result<Vec<VsopTerm>, BodyError> {
    let mut terms = Vec::new();
    let mut pending = [0.0; 3];
    let mut filled = 0;
    let mut last_line = 0;

    for (idx, line) in content.lines().enumerate() {
        last_line = idx + 1;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| BodyError::SeriesParse {
                path: path.to_path_buf(),
                line: idx + 1,
                message: format!("not a number: {token:?}"),
            })?;
            pending[filled] = value;
            filled += 1;
            if filled == 3 {
                terms.push(VsopTerm::new(pending[0], pending[1], pending[2]));
                filled = 0;
            }
        }
    }

    if filled != 0 {
        return Err(BodyError::SeriesParse {
            path: path.to_path_buf(),
            line: last_line,
            message: format!("incomplete term: {filled} of 3 values"),
        });
    }
    Ok(terms)
}
