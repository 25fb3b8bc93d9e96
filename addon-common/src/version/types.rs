// Copyright 2025 OPPO.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Why a string is not a semantic version.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("version string is empty")]
    Empty,

    #[error("expected 'major.minor.patch', found {found} numeric components")]
    WrongComponentCount { found: usize },

    #[error("{component} version is empty")]
    EmptyComponent { component: &'static str },

    #[error("invalid {component} version '{value}'")]
    InvalidNumber {
        component: &'static str,
        value: String,
    },

    #[error("{component} version '{value}' must not contain leading zeroes")]
    LeadingZero {
        component: &'static str,
        value: String,
    },

    #[error("{section} identifier is empty")]
    EmptyIdentifier { section: &'static str },

    #[error("invalid character in {section} identifier '{value}'")]
    InvalidIdentifier {
        section: &'static str,
        value: String,
    },
}

/// A single dot-separated pre-release identifier.
///
/// Numeric identifiers always rank below alphanumeric ones, which is exactly
/// the variant order below.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prerelease {
    Numeric(u64),
    AlphaNumeric(String),
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prerelease::Numeric(n) => write!(f, "{}", n),
            Prerelease::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Version following Semantic Versioning 2.0
#[derive(Debug, Clone, SerializeDisplay, DeserializeFromStr)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Vec<Prerelease>,
    pub build: Vec<String>,
}

impl Version {
    /// The lowest possible version, 0.0.0.
    pub const ZERO: Version = Version::new(0, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Get current version from environment variables (Cargo.toml)
    pub fn current() -> Self {
        Self::from_str(super::VERSION).unwrap_or(Self::ZERO)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    fn parse_numeric(component: &'static str, value: &str) -> Result<u64, VersionParseError> {
        if value.is_empty() {
            return Err(VersionParseError::EmptyComponent { component });
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionParseError::InvalidNumber {
                component,
                value: value.to_string(),
            });
        }
        if value.len() > 1 && value.starts_with('0') {
            return Err(VersionParseError::LeadingZero {
                component,
                value: value.to_string(),
            });
        }

        value
            .parse::<u64>()
            .map_err(|_| VersionParseError::InvalidNumber {
                component,
                value: value.to_string(),
            })
    }

    fn check_identifier(section: &'static str, value: &str) -> Result<(), VersionParseError> {
        if value.is_empty() {
            return Err(VersionParseError::EmptyIdentifier { section });
        }
        if !value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(VersionParseError::InvalidIdentifier {
                section,
                value: value.to_string(),
            });
        }
        Ok(())
    }

    fn parse_pre(s: &str) -> Result<Vec<Prerelease>, VersionParseError> {
        s.split('.')
            .map(|part| {
                Self::check_identifier("pre-release", part)?;
                if part.bytes().all(|b| b.is_ascii_digit()) {
                    Self::parse_numeric("pre-release", part).map(Prerelease::Numeric)
                } else {
                    Ok(Prerelease::AlphaNumeric(part.to_string()))
                }
            })
            .collect()
    }

    fn parse_build(s: &str) -> Result<Vec<String>, VersionParseError> {
        s.split('.')
            .map(|part| {
                Self::check_identifier("build", part)?;
                Ok(part.to_string())
            })
            .collect()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (i, id) in self.pre.iter().enumerate() {
            let sep = if i == 0 { '-' } else { '.' };
            write!(f, "{}{}", sep, id)?;
        }
        for (i, id) in self.build.iter().enumerate() {
            let sep = if i == 0 { '+' } else { '.' };
            write!(f, "{}{}", sep, id)?;
        }

        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        // Build metadata may contain '-', so it is split off first.
        let (rest, build) = match s.split_once('+') {
            Some((rest, build)) => (rest, Self::parse_build(build)?),
            None => (s, Vec::new()),
        };
        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, Self::parse_pre(pre)?),
            None => (rest, Vec::new()),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionParseError::WrongComponentCount { found: parts.len() });
        }

        Ok(Self {
            major: Self::parse_numeric("major", parts[0])?,
            minor: Self::parse_numeric("minor", parts[1])?,
            patch: Self::parse_numeric("patch", parts[2])?,
            pre,
            build,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::from_str(s).unwrap()
    }

    #[test]
    fn test_version_parsing() {
        let v = v("1.2.3");
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
        assert!(!v.is_prerelease());
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_prerelease_and_build() {
        let v = v("2.0.0-rc.1+git.4f2a-dirty");
        assert_eq!(
            v.pre,
            vec![
                Prerelease::AlphaNumeric("rc".to_string()),
                Prerelease::Numeric(1)
            ]
        );
        assert_eq!(v.build, vec!["git".to_string(), "4f2a-dirty".to_string()]);
        assert!(v.is_prerelease());
        assert_eq!(v.to_string(), "2.0.0-rc.1+git.4f2a-dirty");

        let hyphenated = Version::from_str("1.0.0-alpha-1").unwrap();
        assert_eq!(
            hyphenated.pre,
            vec![Prerelease::AlphaNumeric("alpha-1".to_string())]
        );
    }

    #[test]
    fn test_version_comparison() {
        let v1 = Version::new(1, 2, 3);
        let v2 = Version::new(1, 2, 4);
        let v3 = Version::new(1, 3, 0);
        let v4 = Version::new(2, 0, 0);

        assert!(v1 < v2);
        assert!(v2 < v3);
        assert!(v3 < v4);
        assert_eq!(v1, v1);
        assert!(Version::ZERO < v1);
    }

    #[test]
    fn test_prerelease_precedence() {
        // Ordering example from SemVer 2.0 §11.
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(v("1.5.0+build.1"), v("1.5.0+build.2"));
        assert_eq!(v("1.5.0+build.1").cmp(&v("1.5.0")), Ordering::Equal);
    }

    #[test]
    fn test_invalid_version_formats() {
        assert_eq!(Version::from_str(""), Err(VersionParseError::Empty));
        assert!(Version::from_str("1.2").is_err());
        assert!(Version::from_str("1.2.3.4").is_err());
        assert!(Version::from_str("a.b.c").is_err());
        assert!(Version::from_str("v1.2.3").is_err());
        assert!(Version::from_str(" 1.2.3").is_err());
        assert!(Version::from_str("1..3").is_err());
        assert!(Version::from_str("1.2.3-").is_err());
        assert!(Version::from_str("1.2.3+").is_err());
        assert!(Version::from_str("1.2.3-rc..1").is_err());
        assert!(Version::from_str("1.2.3-rc_1").is_err());
        assert!(Version::from_str("not-a-version").is_err());
    }

    #[test]
    fn test_leading_zeroes() {
        assert!(matches!(
            Version::from_str("01.2.3"),
            Err(VersionParseError::LeadingZero { component: "major", .. })
        ));
        assert!(Version::from_str("1.2.3-rc.01").is_err());
        // Alphanumeric identifiers and build metadata may start with zero.
        assert!(Version::from_str("1.2.3-0a").is_ok());
        assert!(Version::from_str("1.2.3+001").is_ok());
        assert!(Version::from_str("0.0.0").is_ok());
    }

    #[test]
    fn test_serde_as_string() {
        let v = v("1.4.0-beta.2");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.4.0-beta.2\"");
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        assert!(serde_json::from_str::<Version>("\"1.4\"").is_err());
    }

    #[test]
    fn test_current() {
        assert_eq!(Version::current().to_string(), crate::version::VERSION);
    }
}
