//! In-memory ticket table and the CSV loader that builds it.
//!
//! Loading is strict at the file level (missing file, missing required
//! columns, unparsable CSV) and tolerant at the cell level (bad dates and
//! numbers become nulls).

pub mod cell;
pub mod columns;

use std::io::Read;
use std::path::{Path, PathBuf};

use time::PrimitiveDateTime;
use tracing::debug;

use crate::error::EngineError;

pub use cell::{CellValue, ColumnKind};
pub use columns::ColumnMap;

/// Agent names that stand for "no human assignee".
pub const SENTINEL_AGENTS: &[&str] = &["Ghost", "UnAssigned", ""];

/// Where the ticket dataset lives. Injected into the engine instead of being
/// resolved from a process-wide location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSource {
    path: PathBuf,
}

impl DatasetSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Dataset, EngineError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(EngineError::SourceNotFound {
                    path: self.path.clone(),
                });
            }
            Err(error) => {
                return Err(EngineError::malformed(
                    &self.path,
                    format!("unable to open source: {error}"),
                ));
            }
        };
        if file.metadata().is_ok_and(|metadata| metadata.is_dir()) {
            return Err(EngineError::malformed(&self.path, "source is a directory"));
        }

        Dataset::from_reader(std::io::BufReader::new(file), &self.path)
    }
}

/// One ticket row: every source cell plus typed views of the columns the
/// engine reasons about.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRecord {
    pub cells: Vec<CellValue>,
    pub request_date: Option<PrimitiveDateTime>,
    pub resolution_date: Option<PrimitiveDateTime>,
    pub main_category: Option<String>,
    pub completed_type: Option<String>,
    pub time_taken_minutes: Option<f64>,
    pub agent_name: Option<String>,
}

impl TicketRecord {
    /// True when the assignee is a real person rather than a placeholder.
    #[must_use]
    pub fn has_human_agent(&self) -> bool {
        self.agent_name
            .as_deref()
            .is_some_and(|name| !SENTINEL_AGENTS.contains(&name))
    }
}

/// Loaded ticket table. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    column_kinds: Vec<ColumnKind>,
    records: Vec<TicketRecord>,
}

impl Dataset {
    /// Parses CSV text from any reader. `origin` is only used in error
    /// messages.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self, EngineError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .double_quote(true)
            .quoting(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|error| EngineError::malformed(origin, error.to_string()))?
            .clone();
        if headers.iter().all(|field| field.trim().is_empty()) {
            return Err(EngineError::malformed(origin, "header row is empty"));
        }

        let column_map = ColumnMap::from_headers(&headers);
        let missing = column_map.missing_required();
        if !missing.is_empty() {
            return Err(EngineError::malformed(
                origin,
                format!("missing required columns: {}", missing.join(", ")),
            ));
        }

        let width = column_map.headers().len();
        let mut raw_rows: Vec<csv::StringRecord> = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let record =
                result.map_err(|error| EngineError::malformed(origin, error.to_string()))?;
            if record.len() > width {
                // +2: one for the header row, one for 1-based numbering.
                return Err(EngineError::malformed(
                    origin,
                    format!(
                        "line {} has {} fields but the header declares {width}",
                        index + 2,
                        record.len()
                    ),
                ));
            }
            raw_rows.push(record);
        }

        let column_kinds: Vec<ColumnKind> = column_map
            .headers()
            .iter()
            .enumerate()
            .map(|(position, name)| {
                if columns::DATE_COLUMNS.contains(&name.as_str()) {
                    ColumnKind::Timestamp
                } else {
                    ColumnKind::infer(raw_rows.iter().map(|row| row.get(position).unwrap_or("")))
                }
            })
            .collect();

        let mut coerced_dates = 0usize;
        let records: Vec<TicketRecord> = raw_rows
            .iter()
            .map(|row| {
                let cells: Vec<CellValue> = column_kinds
                    .iter()
                    .enumerate()
                    .map(|(position, kind)| {
                        CellValue::parse(row.get(position).unwrap_or(""), *kind)
                    })
                    .collect();
                let record = build_record(&column_map, row, cells);
                coerced_dates += count_coerced_dates(&column_map, row, &record);
                record
            })
            .collect();

        debug!(
            source = %origin.display(),
            rows = records.len(),
            columns = width,
            coerced_dates,
            "loaded ticket dataset"
        );

        Ok(Self {
            columns: column_map.headers().to_vec(),
            column_kinds,
            records,
        })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn records(&self) -> &[TicketRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn column_kind(&self, column: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|position| self.column_kinds.get(position).copied())
    }

    /// Fails when `column` holds values that cannot take part in arithmetic.
    pub fn require_numeric(&self, column: &str) -> Result<(), EngineError> {
        match self.column_kind(column) {
            Some(kind) if kind.is_numeric() => Ok(()),
            Some(kind) => Err(EngineError::Query(format!(
                "column '{column}' must be numeric but holds {} values",
                kind.as_str()
            ))),
            None => Err(EngineError::Query(format!("unknown column '{column}'"))),
        }
    }
}

fn build_record(
    column_map: &ColumnMap,
    row: &csv::StringRecord,
    cells: Vec<CellValue>,
) -> TicketRecord {
    let cell = |column: &str| {
        column_map
            .index_of(column)
            .and_then(|position| cells.get(position))
            .cloned()
            .unwrap_or(CellValue::Null)
    };
    let text = |column: &str| {
        column_map
            .index_of(column)
            .and_then(|position| row.get(position))
            .filter(|raw| !cell::is_null_marker(raw))
            .map(str::to_string)
    };

    TicketRecord {
        request_date: cell(columns::REQUEST_DATE).as_timestamp(),
        resolution_date: cell(columns::RESOLUTION_DATE).as_timestamp(),
        main_category: text(columns::MAIN_CATEGORY),
        completed_type: text(columns::COMPLETED_TYPE),
        time_taken_minutes: cell(columns::TIME_TAKEN_MINUTES).as_f64(),
        agent_name: text(columns::AGENT_NAME),
        cells,
    }
}

fn count_coerced_dates(
    column_map: &ColumnMap,
    row: &csv::StringRecord,
    record: &TicketRecord,
) -> usize {
    [
        (columns::REQUEST_DATE, record.request_date),
        (columns::RESOLUTION_DATE, record.resolution_date),
    ]
    .into_iter()
    .filter(|(column, parsed)| {
        parsed.is_none()
            && column_map
                .index_of(column)
                .and_then(|position| row.get(position))
                .is_some_and(|raw| !cell::is_null_marker(raw))
    })
    .count()
}
