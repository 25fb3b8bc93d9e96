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

use crate::api::{CommonObject, CommonSpec, CommonStatus, DeclarativeObject};
use crate::manifest::ManifestError;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ADDON_API_VERSION: &str = "addons.k8s.io/v1alpha1";
pub const ADDON_KIND: &str = "Addon";

/// A generic addon custom resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: CommonSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CommonStatus>,
}

impl Addon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: ADDON_API_VERSION.to_string(),
            kind: ADDON_KIND.to_string(),
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..Default::default()
            },
            spec: CommonSpec::default(),
            status: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = Some(namespace.into());
        self
    }

    pub fn from_yaml(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }
}

impl DeclarativeObject for Addon {
    fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }

    fn as_common_object(&mut self) -> Option<&mut dyn CommonObject> {
        Some(self)
    }
}

impl CommonObject for Addon {
    fn name(&self) -> &str {
        DeclarativeObject::name(self)
    }

    fn common_spec(&self) -> &CommonSpec {
        &self.spec
    }

    fn common_status(&self) -> Option<&CommonStatus> {
        self.status.as_ref()
    }

    fn set_common_status(&mut self, status: CommonStatus) {
        self.status = Some(status);
    }
}
