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

use crate::manifest::ManifestError;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

static NO_ANNOTATIONS: BTreeMap<String, String> = BTreeMap::new();

/// One rendered resource. Only the type and metadata are interpreted, the
/// rest of the document is carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestObject {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl ManifestObject {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..Default::default()
            },
            data: serde_json::Map::new(),
        }
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .annotations
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }

    /// Annotations of the object, empty when the object has none.
    pub fn annotations(&self) -> &BTreeMap<String, String> {
        self.metadata.annotations.as_ref().unwrap_or(&NO_ANNOTATIONS)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations().get(key).map(String::as_str)
    }

    /// `group/Kind`, or just `Kind` for the core group.
    pub fn group_kind(&self) -> String {
        match self.api_version.split_once('/') {
            Some((group, _)) => format!("{}/{}", group, self.kind),
            None => self.kind.clone(),
        }
    }
}

/// Ordered set of manifest objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Objects {
    pub items: Vec<ManifestObject>,
}

impl Objects {
    pub fn new(items: Vec<ManifestObject>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManifestObject> {
        self.items.iter()
    }

    /// Parse a multi-document yaml stream. Empty documents are skipped.
    pub fn parse_yaml(content: &str) -> Result<Self, ManifestError> {
        let mut items = Vec::new();

        for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
            let value = serde_yaml::Value::deserialize(document)?;
            if value.is_null() {
                debug!("skipping empty manifest document #{}", index);
                continue;
            }
            if !value.is_mapping() {
                return Err(ManifestError::InvalidObject {
                    index,
                    reason: "document is not a mapping".to_string(),
                });
            }

            let obj: ManifestObject = serde_yaml::from_value(value)?;
            if obj.kind.is_empty() {
                return Err(ManifestError::InvalidObject {
                    index,
                    reason: "missing kind".to_string(),
                });
            }
            items.push(obj);
        }

        debug!("parsed {} manifest objects", items.len());
        Ok(Self { items })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse_yaml(&content)
    }
}

impl FromIterator<ManifestObject> for Objects {
    fn from_iter<T: IntoIterator<Item = ManifestObject>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Objects {
    type Item = &'a ManifestObject;
    type IntoIter = std::slice::Iter<'a, ManifestObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::MIN_OPERATOR_VERSION_ANNOTATION;
    use std::io::Write;

    const MANIFEST: &str = r#"
# rendered by the addon loader
---
apiVersion: v1
kind: ServiceAccount
metadata:
  name: coredns
  namespace: kube-system
---
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: coredns
  namespace: kube-system
  annotations:
    addons.k8s.io/min-operator-version: "1.2.0"
    owner: dns-team
spec:
  replicas: 2
"#;

    #[test]
    fn test_parse_multi_document() {
        let objects = Objects::parse_yaml(MANIFEST).unwrap();
        assert_eq!(objects.len(), 2);

        let sa = &objects.items[0];
        assert_eq!(sa.group_kind(), "ServiceAccount");
        assert!(sa.annotations().is_empty());
        assert_eq!(sa.annotation(MIN_OPERATOR_VERSION_ANNOTATION), None);

        let deploy = &objects.items[1];
        assert_eq!(deploy.group_kind(), "apps/Deployment");
        assert_eq!(deploy.name(), Some("coredns"));
        assert_eq!(deploy.namespace(), Some("kube-system"));
        assert_eq!(
            deploy.annotation(MIN_OPERATOR_VERSION_ANNOTATION),
            Some("1.2.0")
        );
        assert_eq!(deploy.data["spec"]["replicas"], 2);
    }

    #[test]
    fn test_parse_empty_stream() {
        assert!(Objects::parse_yaml("").unwrap().is_empty());
        assert!(Objects::parse_yaml("---\n# nothing\n---\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_documents() {
        let err = Objects::parse_yaml("- a\n- b\n").unwrap_err();
        assert!(matches!(err, ManifestError::InvalidObject { index: 0, .. }));

        let err = Objects::parse_yaml("apiVersion: v1\nmetadata:\n  name: x\n").unwrap_err();
        assert!(err.to_string().contains("missing kind"));

        let err = Objects::parse_yaml("kind: [unclosed").unwrap_err();
        assert!(matches!(err, ManifestError::Yaml(_)));
    }

    #[test]
    fn test_builder_and_iteration() {
        let objects: Objects = vec![
            ManifestObject::new("v1", "ConfigMap", "a").with_annotation("k", "v"),
            ManifestObject::new("v1", "ConfigMap", "b"),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = objects.iter().filter_map(|o| o.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!((&objects).into_iter().next().unwrap().annotation("k"), Some("v"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();

        let objects = Objects::from_file(file.path()).unwrap();
        assert_eq!(objects.len(), 2);

        let err = Objects::from_file("/nonexistent/manifest.yaml").unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
