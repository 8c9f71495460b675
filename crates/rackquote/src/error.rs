use derive_more::Display;
use rackquote_core::{audit::CatalogIssue, error::SelectionError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<SelectionError> for Error {
    fn from(err: SelectionError) -> Self {
        let kind = match &err {
            SelectionError::DriveBaysExhausted { .. } => SelectionErrorKind::DriveBaysExhausted,
            SelectionError::DualSocketUnsupported { .. } => {
                SelectionErrorKind::DualSocketUnsupported
            }
            SelectionError::MixedGpuModels { .. } => SelectionErrorKind::MixedGpuModels,
        };

        Self::new(
            ErrorKind::Selection(kind),
            ErrorOrigin::Configuration,
            err.to_string(),
        )
    }
}

impl From<CatalogIssue> for Error {
    fn from(issue: CatalogIssue) -> Self {
        let kind = match &issue {
            CatalogIssue::BayCountMismatch { .. } => CatalogErrorKind::BayCountMismatch,
            CatalogIssue::DuplicateGpuModel { .. } => CatalogErrorKind::DuplicateGpuModel,
            CatalogIssue::NonPositiveCpuSpec { .. } => CatalogErrorKind::NonPositiveCpuSpec,
            CatalogIssue::UnknownCpuFamily { .. } => CatalogErrorKind::UnknownCpuFamily,
        };

        Self::new(
            ErrorKind::Catalog(kind),
            ErrorOrigin::Catalog,
            issue.to_string(),
        )
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// A configuration transition was rejected; the prior state is
    /// retained and the user can revise the selection.
    Selection(SelectionErrorKind),

    /// A catalog data-quality finding a caller chose to escalate.
    /// Findings never fail engine evaluation on their own.
    Catalog(CatalogErrorKind),

    /// Quote assembly failed (timestamp formatting).
    Quote(QuoteErrorKind),
}

///
/// SelectionErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum SelectionErrorKind {
    DriveBaysExhausted,
    DualSocketUnsupported,
    MixedGpuModels,
}

///
/// CatalogErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum CatalogErrorKind {
    BayCountMismatch,
    DuplicateGpuModel,
    NonPositiveCpuSpec,
    UnknownCpuFamily,
}

///
/// QuoteErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QuoteErrorKind {
    Timestamp,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ErrorOrigin {
    Catalog,
    Configuration,
    Quote,
}

///
/// TESTS
///
