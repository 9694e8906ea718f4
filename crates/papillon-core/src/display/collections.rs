//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Account, GradesState, Period, QrCode};

/// Newtype wrapper for displaying the stored QR codes.
pub struct QrCodes(pub Vec<QrCode>);

impl QrCodes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for QrCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No QR codes found.");
        }
        for code in &self.0 {
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the stored accounts.
pub struct Accounts(pub Vec<Account>);

impl fmt::Display for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No accounts found.");
        }
        for account in &self.0 {
            write!(f, "{account}")?;
        }
        Ok(())
    }
}

/// Periods with the default one marked.
pub struct Periods<'a> {
    pub periods: &'a [Period],
    pub default_period: Option<&'a str>,
}

impl fmt::Display for Periods<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.periods.is_empty() {
            return writeln!(f, "No periods found.");
        }
        for period in self.periods {
            if Some(period.name.as_str()) == self.default_period {
                writeln!(f, "- **{period}** (default)")?;
            } else {
                writeln!(f, "- {period}")?;
            }
        }
        Ok(())
    }
}

/// Grades and averages of one period, or of every period if none is chosen.
pub struct GradesReport<'a> {
    pub state: &'a GradesState,
    pub period: Option<&'a str>,
}

impl GradesReport<'_> {
    fn write_period(&self, f: &mut fmt::Formatter<'_>, period: &str) -> fmt::Result {
        writeln!(f, "## {period}")?;
        writeln!(f)?;

        match self.state.grades.get(period) {
            Some(grades) if !grades.is_empty() => {
                for grade in grades {
                    write!(f, "{grade}")?;
                }
            }
            _ => writeln!(f, "No grades.")?,
        }

        if let Some(averages) = self.state.averages.get(period) {
            writeln!(f)?;
            writeln!(
                f,
                "Overall: {} (class: {})",
                averages.overall, averages.class_overall
            )?;
            for subject in &averages.subjects {
                writeln!(
                    f,
                    "- {}: {} (class: {})",
                    subject.subject_name, subject.average, subject.class_average
                )?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for GradesReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(updated_at) = &self.state.updated_at {
            writeln!(f, "Last update: {}", LocalDateTime(updated_at))?;
            writeln!(f)?;
        }

        match self.period {
            Some(period) => self.write_period(f, period),
            None if self.state.grades.is_empty() => writeln!(f, "No grades stored."),
            None => {
                for period in self.state.grades.keys() {
                    self.write_period(f, period)?;
                }
                Ok(())
            }
        }
    }
}
