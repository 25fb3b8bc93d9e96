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

use serde::{Deserialize, Serialize};

/// Desired addon version and release channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

/// Health as reported back on an addon object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl CommonStatus {
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            ..Default::default()
        }
    }

    /// An unhealthy status carrying a single diagnostic.
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }
}

/// Capability of reporting health on the object itself.
pub trait CommonObject {
    fn name(&self) -> &str;

    fn common_spec(&self) -> &CommonSpec;

    fn common_status(&self) -> Option<&CommonStatus>;

    fn set_common_status(&mut self, status: CommonStatus);
}

/// An object being reconciled.
pub trait DeclarativeObject: Send + Sync {
    fn name(&self) -> &str;

    fn namespace(&self) -> Option<&str> {
        None
    }

    /// Concrete type name, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Narrow to the status reporting capability. Types that cannot report
    /// status keep the default.
    fn as_common_object(&mut self) -> Option<&mut dyn CommonObject> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl DeclarativeObject for Plain {
        fn name(&self) -> &str {
            "plain"
        }
    }

    #[test]
    fn test_unhealthy_status() {
        let status = CommonStatus::unhealthy("boom");
        assert!(!status.healthy);
        assert_eq!(status.errors, vec!["boom".to_string()]);
        assert!(CommonStatus::healthy().healthy);
    }

    #[test]
    fn test_status_serde_camel_case() {
        let status = CommonStatus {
            observed_generation: Some(3),
            ..CommonStatus::unhealthy("too old")
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "healthy": false,
                "errors": ["too old"],
                "observedGeneration": 3
            })
        );

        let back: CommonStatus = serde_json::from_value(json).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn test_default_capability_is_absent() {
        let mut plain = Plain;
        assert!(plain.as_common_object().is_none());
        assert!(plain.type_name().ends_with("Plain"));
        assert_eq!(plain.namespace(), None);
    }
}
