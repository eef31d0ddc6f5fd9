use std::fmt::{self, Display, Formatter};

use crate::error::{ModelError, Result};

/// Release type codes as carried by TMDB-sourced `release_dates` payloads.
///
/// Variants are declared in upstream code order (1 through 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReleaseType {
    Premiere = 1,
    TheatricalLimited = 2,
    Theatrical = 3,
    Digital = 4,
    Physical = 5,
    Tv = 6,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 6] = [
        ReleaseType::Premiere,
        ReleaseType::TheatricalLimited,
        ReleaseType::Theatrical,
        ReleaseType::Digital,
        ReleaseType::Physical,
        ReleaseType::Tv,
    ];

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(ReleaseType::Premiere),
            2 => Ok(ReleaseType::TheatricalLimited),
            3 => Ok(ReleaseType::Theatrical),
            4 => Ok(ReleaseType::Digital),
            5 => Ok(ReleaseType::Physical),
            6 => Ok(ReleaseType::Tv),
            other => Err(ModelError::InvalidReleaseType(other)),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ReleaseType {
    type Error = ModelError;

    fn try_from(value: i32) -> Result<Self> {
        ReleaseType::from_code(value)
    }
}

impl Display for ReleaseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseType::Premiere => write!(f, "Premiere"),
            ReleaseType::TheatricalLimited => write!(f, "Theatrical (limited)"),
            ReleaseType::Theatrical => write!(f, "Theatrical"),
            ReleaseType::Digital => write!(f, "Digital"),
            ReleaseType::Physical => write!(f, "Physical"),
            ReleaseType::Tv => write!(f, "TV"),
        }
    }
}

/// The three release kinds surfaced to chat users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayCategory {
    Theatrical,
    Digital,
    Physical,
}

impl DisplayCategory {
    /// Fixed output order of a release timeline.
    pub const ORDER: [DisplayCategory; 3] = [
        DisplayCategory::Theatrical,
        DisplayCategory::Digital,
        DisplayCategory::Physical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DisplayCategory::Theatrical => "Theatrical",
            DisplayCategory::Digital => "Digital",
            DisplayCategory::Physical => "Physical",
        }
    }
}

impl Display for DisplayCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Upper-cased ISO 3166-1 alpha-2 region code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let trimmed = code.as_ref().trim();
        if trimmed.len() != 2
            || !trimmed.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ModelError::InvalidRegion(trimmed.to_string()));
        }
        Ok(RegionCode(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        RegionCode("US".to_string())
    }
}

impl TryFrom<String> for RegionCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        RegionCode::new(value)
    }
}

impl From<RegionCode> for String {
    fn from(value: RegionCode) -> Self {
        value.0
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for RegionCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_type_codes_follow_upstream_order() {
        for (idx, ty) in ReleaseType::ALL.iter().enumerate() {
            assert_eq!(ty.code(), idx as i32 + 1);
            assert_eq!(ReleaseType::from_code(ty.code()), Ok(*ty));
        }
        assert_eq!(
            ReleaseType::from_code(7),
            Err(ModelError::InvalidReleaseType(7))
        );
        assert!(ReleaseType::try_from(0).is_err());
    }

    #[test]
    fn region_codes_are_normalized() {
        assert_eq!(RegionCode::new(" gb ").unwrap().as_str(), "GB");
        assert_eq!(RegionCode::default().as_str(), "US");
        assert!(RegionCode::new("USA").is_err());
        assert!(RegionCode::new("1A").is_err());
        assert!(RegionCode::new("").is_err());
    }
}
