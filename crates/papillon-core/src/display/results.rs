//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    grades::RefreshOutcome,
    models::{Account, QrCode, SubjectData},
};

/// Wrapper type for displaying the result of create operations.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<QrCode> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added QR code with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Account> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added account with ID: {}", self.resource.local_id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<QrCode> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed QR code '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Account> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed account '{}' (ID: {})",
            self.resource.name, self.resource.local_id
        )
    }
}

/// A stored QR code followed by its drawn symbol.
#[derive(Debug, Clone)]
pub struct QrCodeSymbol {
    pub code: QrCode,
    pub blocks: String,
}

impl fmt::Display for QrCodeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        writeln!(f, "```")?;
        write!(f, "{}", self.blocks)?;
        writeln!(f, "```")
    }
}

/// A classified subject label with its assignment.
#[derive(Debug, Clone)]
pub struct SubjectResult {
    pub entry: String,
    pub data: SubjectData,
}

impl fmt::Display for SubjectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {}", self.data.emoji, self.data.pretty)?;
        writeln!(f)?;
        writeln!(f, "- Label: {}", self.entry)?;
        writeln!(f, "- Colour: `{}`", self.data.color)
    }
}

impl fmt::Display for RefreshOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshOutcome::PeriodsUpdated {
                account,
                count,
                default_period,
            } => writeln!(
                f,
                "Stored {count} period(s) from account {account}, default: {default_period}"
            ),
            RefreshOutcome::GradesUpdated {
                account,
                period,
                count,
            } => writeln!(
                f,
                "Stored {count} grade(s) for period '{period}' from account {account}"
            ),
            RefreshOutcome::NoGradesAccount { space } => writeln!(
                f,
                "Multi-service space {space} has no account for grades, nothing updated"
            ),
            RefreshOutcome::FeatureUnsupported { account } => writeln!(
                f,
                "Grades are disabled on the instance of account {account}, nothing updated"
            ),
            RefreshOutcome::NoPeriods { account } => {
                writeln!(f, "Account {account} returned no period, nothing updated")
            }
            RefreshOutcome::Failed { account, message } => {
                writeln!(f, "Grades not updated for account {account}: {message}")
            }
        }
    }
}
