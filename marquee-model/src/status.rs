use std::fmt::{self, Display, Formatter};

/// Library availability as reported by Overseerr's `mediaInfo.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaStatus {
    #[default]
    Unknown = 1,
    Pending = 2,
    Processing = 3,
    PartiallyAvailable = 4,
    Available = 5,
}

impl MediaStatus {
    /// Maps a raw status code; anything outside 1..=5 is treated as unknown.
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => MediaStatus::Pending,
            3 => MediaStatus::Processing,
            4 => MediaStatus::PartiallyAvailable,
            5 => MediaStatus::Available,
            _ => MediaStatus::Unknown,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaStatus::Unknown => "Unknown or Not Available",
            MediaStatus::Pending => "Requested to be Fulfilled",
            MediaStatus::Processing => "Waiting to be Fulfilled",
            MediaStatus::PartiallyAvailable => "Partially Available",
            MediaStatus::Available => "Available",
        }
    }
}

impl From<Option<i32>> for MediaStatus {
    fn from(value: Option<i32>) -> Self {
        value.map(MediaStatus::from_code).unwrap_or_default()
    }
}

impl Display for MediaStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_codes() {
        let expected = [
            (1, "Unknown or Not Available"),
            (2, "Requested to be Fulfilled"),
            (3, "Waiting to be Fulfilled"),
            (4, "Partially Available"),
            (5, "Available"),
        ];
        for (code, label) in expected {
            let status = MediaStatus::from_code(code);
            assert_eq!(status.code(), code);
            assert_eq!(status.label(), label);
        }
    }

    #[test]
    fn missing_or_unmapped_codes_are_unknown() {
        assert_eq!(MediaStatus::from(None), MediaStatus::Unknown);
        assert_eq!(MediaStatus::from_code(0), MediaStatus::Unknown);
        assert_eq!(MediaStatus::from_code(6), MediaStatus::Unknown);
    }
}
