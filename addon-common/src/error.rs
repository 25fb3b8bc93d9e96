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

use crate::conf::ConfError;
use crate::manifest::ManifestError;
use crate::version::{Version, VersionParseError};

pub type GateResult<T> = Result<T, GateError>;

#[derive(thiserror::Error, Debug)]
pub enum GateError {
    /// A version string, either the operator's own or an annotation value,
    /// is not a semantic version.
    #[error("unable to parse version {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: VersionParseError,
    },

    /// The reconciled object cannot report status.
    #[error("object {type_name} was not a CommonObject")]
    TypeMismatch { type_name: &'static str },

    /// The operator is older than the manifest requires.
    #[error("{}", version_mismatch_message(.required, .actual))]
    VersionMismatch { required: Version, actual: Version },

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Conf(#[from] ConfError),
}

impl GateError {
    pub fn parse(input: impl Into<String>, source: VersionParseError) -> Self {
        Self::Parse {
            input: input.into(),
            source,
        }
    }

    /// Only an operator that is too old can succeed on a later pass, after
    /// an upgrade.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::VersionMismatch { .. })
    }
}

pub fn version_mismatch_message(required: &Version, actual: &Version) -> String {
    format!(
        "manifest needs operator version >= {}, this operator is version {}",
        required, actual
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_error_display() {
        let source = Version::from_str("not-a-version").unwrap_err();
        let err = GateError::parse("not-a-version", source);
        let msg = err.to_string();
        assert!(msg.starts_with("unable to parse version \"not-a-version\""));
        assert!(!err.is_retryable());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_version_mismatch_display() {
        let err = GateError::VersionMismatch {
            required: Version::new(2, 0, 0),
            actual: Version::new(1, 0, 0),
        };
        assert_eq!(
            err.to_string(),
            "manifest needs operator version >= 2.0.0, this operator is version 1.0.0"
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = GateError::TypeMismatch {
            type_name: "my_operator::Widget",
        };
        assert_eq!(
            err.to_string(),
            "object my_operator::Widget was not a CommonObject"
        );
        assert!(!err.is_retryable());
    }
}
