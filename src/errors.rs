#[derive(Debug, Clone, PartialEq)]
pub struct ChartError {
    pub repr: ChartErrorRepr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartErrorRepr {
    /// A measure that is empty, not a number, or not finite.
    InvalidInput {
        row: Option<usize>,
        column: String,
        value: String,
    },
    /// A NaN or infinite measure handed straight to the summarizer.
    NonFiniteMeasure {
        group: String,
        value: f64,
    },
    MissingColumn(String),
    UnknownGroup(String),
}

impl ChartError {
    pub fn invalid_input(row: Option<usize>, column: &str, value: &str) -> Self {
        ChartError {
            repr: ChartErrorRepr::InvalidInput {
                row,
                column: column.to_string(),
                value: value.to_string(),
            },
        }
    }

    pub fn non_finite_measure(group: &str, value: f64) -> Self {
        ChartError {
            repr: ChartErrorRepr::NonFiniteMeasure {
                group: group.to_string(),
                value,
            },
        }
    }

    pub fn missing_column(column: &str) -> Self {
        ChartError {
            repr: ChartErrorRepr::MissingColumn(column.to_string()),
        }
    }

    pub fn unknown_group(group: &str) -> Self {
        ChartError {
            repr: ChartErrorRepr::UnknownGroup(group.to_string()),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self.repr,
            ChartErrorRepr::InvalidInput { .. } | ChartErrorRepr::NonFiniteMeasure { .. }
        )
    }
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.repr {
            ChartErrorRepr::InvalidInput {
                row: Some(row),
                column,
                value,
            } => {
                write!(
                    f,
                    "row {}: column '{}' holds '{}', which is not a finite number",
                    row, column, value
                )
            }
            ChartErrorRepr::InvalidInput {
                row: None,
                column,
                value,
            } => {
                write!(f, "'{}' in '{}' is not a finite number", value, column)
            }
            ChartErrorRepr::NonFiniteMeasure { group, value } => {
                write!(
                    f,
                    "group '{}' has a measure of {}, which is not finite",
                    group, value
                )
            }
            ChartErrorRepr::MissingColumn(column) => {
                write!(f, "column '{}' is missing from the data", column)
            }
            ChartErrorRepr::UnknownGroup(group) => {
                write!(f, "'{}' is not in the scale domain", group)
            }
        }
    }
}

impl std::error::Error for ChartError {}
