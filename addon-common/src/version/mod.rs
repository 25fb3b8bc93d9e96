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

//! Semantic versions for operator compatibility checks.
//!
//! Versions follow Semantic Versioning 2.0.
//!
//! # Version Format
//!
//! Versions are represented as: `major.minor.patch[-pre.release][+build.meta]`
//!
//! Example: "1.2.3", "2.0.0-rc.1+git.4f2a"
//!
//! # Ordering
//!
//! Precedence follows SemVer 2.0 §11: numeric components first, then a version
//! without a pre-release ranks above one with it. Build metadata never takes part
//! in ordering or equality.
//!
//! # Example
//!
//! ```rust
//! use addon_common::version::Version;
//! use std::str::FromStr;
//!
//! let operator = Version::from_str("1.5.0").unwrap();
//! let required = Version::from_str("1.5.0-rc.2").unwrap();
//!
//! assert!(operator >= required);
//! ```

mod types;

pub use types::{Prerelease, Version, VersionParseError};

/// Version of the addon crates, as set in the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
