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

use crate::conf::{ConfError, LogConf};
use crate::version::{self, Version};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Operator process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorConf {
    // Version this operator reports when checking manifest requirements.
    pub operator_version: String,

    pub log: LogConf,
}

impl OperatorConf {
    pub const ENV_CONF_FILE: &'static str = "ADDON_CONF_FILE";

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_str(&content)
    }

    /// Load from `path` if given, else from `ADDON_CONF_FILE`, else defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfError> {
        let path = path
            .map(String::from)
            .or_else(|| std::env::var(Self::ENV_CONF_FILE).ok());

        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn init(&mut self) -> Result<(), ConfError> {
        self.operator_version = self.operator_version.trim().to_string();
        Version::from_str(&self.operator_version).map_err(|e| ConfError::Invalid {
            key: "operator_version",
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

impl FromStr for OperatorConf {
    type Err = ConfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut conf: OperatorConf = toml::from_str(s)?;
        conf.init()?;
        Ok(conf)
    }
}

impl Default for OperatorConf {
    fn default() -> Self {
        Self {
            operator_version: version::VERSION.to_string(),
            log: LogConf::default(),
        }
    }
}
