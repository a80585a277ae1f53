//! Instance file errors.

use std::num::ParseIntError;

use thiserror::Error;

use crate::models::NodeId;

/// Failure while reading or writing an instance file.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error on instance file")]
    Io(#[from] std::io::Error),
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid integer `{value}`")]
    InvalidInteger {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: {what} must be positive")]
    NotPositive { line: usize, what: &'static str },
    #[error("line {line}: node {node} is outside 0..={max}")]
    NodeOutOfRange {
        line: usize,
        node: NodeId,
        max: NodeId,
    },
    #[error("line {line}: depot cannot have a demand")]
    DepotDemand { line: usize },
    #[error("line {line}: duplicate demand for node {node}")]
    DuplicateDemand { line: usize, node: NodeId },
    #[error("line {line}: duplicate edge ({from}, {to})")]
    DuplicateEdge {
        line: usize,
        from: NodeId,
        to: NodeId,
    },
    #[error("line {line}: self-loop on node {node}")]
    SelfLoop { line: usize, node: NodeId },
    #[error("line {line}: unexpected content after the last edge")]
    TrailingContent { line: usize },
}

impl FormatError {
    /// Line the error was detected on, if it came from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::UnexpectedEof { line, .. }
            | Self::FieldCount { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::NotPositive { line, .. }
            | Self::NodeOutOfRange { line, .. }
            | Self::DepotDemand { line }
            | Self::DuplicateDemand { line, .. }
            | Self::DuplicateEdge { line, .. }
            | Self::SelfLoop { line, .. }
            | Self::TrailingContent { line } => Some(*line),
        }
    }
}
