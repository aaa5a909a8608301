use std::{
    fs::File,
    io::{self, Read},
    ops::Index,
    path::Path,
    slice,
};

use csv::{ReaderBuilder, StringRecord};

pub mod error {
    use std::{io, path::PathBuf};

    pub type Result<T> = std::result::Result<T, self::LoadError>;

    #[derive(Debug, thiserror::Error)]
    pub enum LoadError {
        #[error("Could not open file '{}'", path.to_string_lossy())]
        SourceUnavailable {
            path: PathBuf,
            #[source]
            source: io::Error,
        },

        #[error("The CSV file '{}' could not be parsed", path.to_string_lossy())]
        MalformedSource {
            path: PathBuf,
            #[source]
            source: MalformedKind,
        },

        #[error("File '{}' could not be closed", path.to_string_lossy())]
        SourceCloseFailure {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
    }

    #[derive(Debug, thiserror::Error)]
    pub enum MalformedKind {
        #[error(transparent)]
        Csv(#[from] csv::Error),

        #[error("line {line} has {found} column(s), expected 'question,answer'")]
        TooFewColumns { line: u64, found: usize },
    }
}
pub use error::{LoadError, MalformedKind, Result};

/// A single question and its expected answer, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    question: String,
    answer: String,
}

impl Problem {
    pub fn new(question: impl AsRef<str>, answer: impl AsRef<str>) -> Self {
        Self {
            question: question.as_ref().trim().to_owned(),
            answer: answer.as_ref().trim().to_owned(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Exact, case-sensitive comparison after trimming the response.
    pub fn is_correct(&self, response: &str) -> bool {
        response.trim() == self.answer
    }
}

/// Problems in the order they appear in the source.
/// A problem is identified by its index, not by its text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    /// Loads every row of a headerless `question,answer` CSV file.
    ///
    /// The whole file must parse; a single bad row rejects the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
            path: path.to_owned(),
            source,
        })?;

        let mut reader = Self::csv_reader(file);
        let problems =
            Self::read_records(&mut reader).map_err(|source| LoadError::MalformedSource {
                path: path.to_owned(),
                source,
            })?;

        self::release(reader.into_inner()).map_err(|source| LoadError::SourceCloseFailure {
            path: path.to_owned(),
            source,
        })?;

        log::info!(
            "Loaded {} problem(s) from '{}'",
            problems.len(),
            path.to_string_lossy()
        );
        Ok(problems)
    }

    pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Self, MalformedKind> {
        Self::read_records(&mut Self::csv_reader(reader))
    }

    fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
    }

    fn read_records<R: Read>(
        reader: &mut csv::Reader<R>,
    ) -> std::result::Result<Self, MalformedKind> {
        let mut problems = Vec::new();
        let mut record = StringRecord::new();

        while reader.read_record(&mut record)? {
            let (Some(question), Some(answer)) = (record.get(0), record.get(1)) else {
                return Err(MalformedKind::TooFewColumns {
                    line: record.position().map_or(0, |pos| pos.line()),
                    found: record.len(),
                });
            };
            problems.push(Problem::new(question, answer));
        }
        Ok(Self { problems })
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Problem> {
        self.problems.iter()
    }
}

/// Files are closed on drop and close(2) errors are swallowed, so the handle is
/// queried one last time to make sure it is still valid before it goes away.
fn release(file: File) -> io::Result<()> {
    file.metadata()?;
    drop(file);
    Ok(())
}

impl Index<usize> for ProblemSet {
    type Output = Problem;

    fn index(&self, index: usize) -> &Problem {
        &self.problems[index]
    }
}

impl<'a> IntoIterator for &'a ProblemSet {
    type Item = &'a Problem;
    type IntoIter = slice::Iter<'a, Problem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Problem> for ProblemSet {
    fn from_iter<I: IntoIterator<Item = Problem>>(iter: I) -> Self {
        Self {
            problems: iter.into_iter().collect(),
        }
    }
}
