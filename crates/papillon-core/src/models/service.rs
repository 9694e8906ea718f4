//! Service and feature enumerations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PapillonError;

/// School information system (or canteen system) an account is bound to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AccountService {
    Pronote,
    EcoleDirecte,
    Skolengo,
    /// Accounts stored on the device, optionally backed by an identity
    /// provider such as the IUT de Lannion portal
    Local,
    /// Indirection space delegating each feature to another account
    PapillonMultiService,
    Turboself,
    Ard,
    Izly,
    Alise,
}

impl AccountService {
    /// Every known service, in declaration order.
    pub const ALL: [AccountService; 9] = [
        AccountService::Pronote,
        AccountService::EcoleDirecte,
        AccountService::Skolengo,
        AccountService::Local,
        AccountService::PapillonMultiService,
        AccountService::Turboself,
        AccountService::Ard,
        AccountService::Izly,
        AccountService::Alise,
    ];

    /// Storage representation, identical to the serde one.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountService::Pronote => "pronote",
            AccountService::EcoleDirecte => "ecole-directe",
            AccountService::Skolengo => "skolengo",
            AccountService::Local => "local",
            AccountService::PapillonMultiService => "papillon-multi-service",
            AccountService::Turboself => "turboself",
            AccountService::Ard => "ard",
            AccountService::Izly => "izly",
            AccountService::Alise => "alise",
        }
    }
}

impl fmt::Display for AccountService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountService::Pronote => "Pronote",
            AccountService::EcoleDirecte => "EcoleDirecte",
            AccountService::Skolengo => "Skolengo",
            AccountService::Local => "Local",
            AccountService::PapillonMultiService => "PapillonMultiService",
            AccountService::Turboself => "Turboself",
            AccountService::Ard => "ARD",
            AccountService::Izly => "Izly",
            AccountService::Alise => "Alise",
        };
        f.write_str(name)
    }
}

impl FromStr for AccountService {
    type Err = PapillonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        let service = match normalized.as_str() {
            "pronote" => AccountService::Pronote,
            "ecole-directe" | "ecoledirecte" => AccountService::EcoleDirecte,
            "skolengo" => AccountService::Skolengo,
            "local" => AccountService::Local,
            "papillon-multi-service" | "multi-service" | "multiservice" => {
                AccountService::PapillonMultiService
            }
            "turboself" => AccountService::Turboself,
            "ard" => AccountService::Ard,
            "izly" => AccountService::Izly,
            "alise" => AccountService::Alise,
            _ => {
                return Err(PapillonError::UnknownService {
                    name: s.to_string(),
                })
            }
        };
        Ok(service)
    }
}

/// Capability a multi-service space can delegate to a concrete account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MultiServiceFeature {
    Grades,
    Timetable,
    Homeworks,
    Attendance,
    News,
    Canteen,
}

impl MultiServiceFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            MultiServiceFeature::Grades => "grades",
            MultiServiceFeature::Timetable => "timetable",
            MultiServiceFeature::Homeworks => "homeworks",
            MultiServiceFeature::Attendance => "attendance",
            MultiServiceFeature::News => "news",
            MultiServiceFeature::Canteen => "canteen",
        }
    }
}

impl fmt::Display for MultiServiceFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MultiServiceFeature::Grades => "Grades",
            MultiServiceFeature::Timetable => "Timetable",
            MultiServiceFeature::Homeworks => "Homeworks",
            MultiServiceFeature::Attendance => "Attendance",
            MultiServiceFeature::News => "News",
            MultiServiceFeature::Canteen => "Canteen",
        };
        f.write_str(name)
    }
}

impl FromStr for MultiServiceFeature {
    type Err = PapillonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grades" => Ok(MultiServiceFeature::Grades),
            "timetable" => Ok(MultiServiceFeature::Timetable),
            "homeworks" | "homework" => Ok(MultiServiceFeature::Homeworks),
            "attendance" => Ok(MultiServiceFeature::Attendance),
            "news" => Ok(MultiServiceFeature::News),
            "canteen" => Ok(MultiServiceFeature::Canteen),
            _ => Err(PapillonError::invalid_input("feature")
                .with_reason(format!("Invalid feature: {s}"))),
        }
    }
}
