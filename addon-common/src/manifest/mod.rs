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

//! Rendered manifests: the objects a reconciler is about to apply.

mod objects;

pub use objects::{ManifestObject, Objects};

/// Annotation declaring the lowest operator version able to manage an object.
pub const MIN_OPERATOR_VERSION_ANNOTATION: &str = "addons.k8s.io/min-operator-version";

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid manifest object #{index}: {reason}")]
    InvalidObject { index: usize, reason: String },
}
