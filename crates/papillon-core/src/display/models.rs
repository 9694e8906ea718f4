//! Display implementations for domain models.

use std::fmt;

use super::datetime::EpochMillis;
use crate::models::{Account, Grade, GradeValue, Period, QrCode, SubjectData};

impl fmt::Display for QrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Data: `{}`", self.data)?;
        writeln!(f)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.service)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.local_id)?;
        if let Some(provider) = &self.identity_provider {
            writeln!(f, "- Identity provider: {provider}")?;
        }
        if !self.disabled_features.is_empty() {
            let features: Vec<&str> = self
                .disabled_features
                .iter()
                .map(|feature| feature.as_str())
                .collect();
            writeln!(f, "- Disabled features: {}", features.join(", "))?;
        }

        let subjects = &self.personalization.subjects;
        if !subjects.is_empty() {
            writeln!(f, "- Subjects:")?;
            for data in subjects.values() {
                writeln!(f, "  - {data}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for SubjectData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} `{}`", self.emoji, self.pretty, self.color)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match (self.start_timestamp, self.end_timestamp) {
            (Some(start), Some(end)) => {
                write!(f, " ({} → {})", EpochMillis(start), EpochMillis(end))
            }
            (Some(start), None) => write!(f, " (from {})", EpochMillis(start)),
            (None, Some(end)) => write!(f, " (until {})", EpochMillis(end)),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Display for GradeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = &self.status {
            return write!(f, "{status}");
        }
        match self.value {
            Some(value) if !self.disabled => write!(f, "{value:.2}"),
            _ => write!(f, "-"),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** {}/{}",
            self.subject_name, self.student, self.out_of
        )?;
        if self.coefficient != 1.0 {
            write!(f, " (coef. {})", self.coefficient)?;
        }
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        if self.timestamp > 0 {
            write!(f, ", {}", EpochMillis(self.timestamp))?;
        }
        if self.is_bonus {
            write!(f, " [bonus]")?;
        }
        if self.is_optional {
            write!(f, " [optional]")?;
        }
        writeln!(f)
    }
}
