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

//! Checks run by an addon reconciler before it applies a rendered manifest.
//!
//! # Example
//!
//! ```rust
//! use addon_common::api::Addon;
//! use addon_common::manifest::{ManifestObject, Objects, MIN_OPERATOR_VERSION_ANNOTATION};
//! use addon_operator::{ReconcileContext, VersionCheck, VersionCheckHook};
//!
//! let check = VersionCheck::new((), "1.4.0").unwrap();
//! let objs = Objects::new(vec![ManifestObject::new("apps/v1", "Deployment", "dns")
//!     .with_annotation(MIN_OPERATOR_VERSION_ANNOTATION, "1.2.0")]);
//!
//! let mut addon = Addon::new("dns");
//! let ok = check
//!     .version_check(&ReconcileContext::new("kube-system/dns"), &mut addon, &objs)
//!     .unwrap();
//! assert!(ok);
//! ```

mod context;
mod version_check;

pub use context::ReconcileContext;
pub use version_check::{GateVerdict, VersionCheck, VersionCheckHook};
