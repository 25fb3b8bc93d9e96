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

use crate::ReconcileContext;
use addon_common::api::{CommonStatus, DeclarativeObject};
use addon_common::error::version_mismatch_message;
use addon_common::manifest::{Objects, MIN_OPERATOR_VERSION_ANNOTATION};
use addon_common::version::Version;
use addon_common::{GateError, GateResult};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reconcile hook deciding whether this operator may manage a manifest.
pub trait VersionCheckHook: Send + Sync {
    /// Returns `Ok(true)` when reconciliation may continue.
    fn version_check(
        &self,
        ctx: &ReconcileContext,
        src: &mut dyn DeclarativeObject,
        objs: &Objects,
    ) -> GateResult<bool>;
}

/// Outcome of comparing the operator against a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateVerdict {
    pub satisfied: bool,
    pub required: Version,
    pub operator: Version,
}

impl GateVerdict {
    pub fn message(&self) -> String {
        version_mismatch_message(&self.required, &self.operator)
    }

    pub fn suggestion(&self) -> Option<String> {
        if self.satisfied {
            None
        } else {
            Some(format!(
                "Please upgrade the operator to version {} or later",
                self.required
            ))
        }
    }
}

/// Checks that the operator is at least as new as every
/// `addons.k8s.io/min-operator-version` found in a manifest.
///
/// Rule: max(min-operator-version) <= operator_version
#[derive(Debug, Clone)]
pub struct VersionCheck<C = ()> {
    client: C,
    operator_version: Version,
}

impl<C> VersionCheck<C> {
    pub fn new(client: C, operator_version: &str) -> GateResult<Self> {
        let operator_version = Version::from_str(operator_version)
            .map_err(|e| GateError::parse(operator_version, e))?;

        Ok(Self {
            client,
            operator_version,
        })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn operator_version(&self) -> &Version {
        &self.operator_version
    }

    /// Highest version required by any object, 0.0.0 if none declares one.
    /// The first unparseable annotation fails the whole scan.
    pub fn required_version(&self, objs: &Objects) -> GateResult<Version> {
        let mut required = Version::ZERO;

        for obj in objs {
            let Some(needed) = obj.annotation(MIN_OPERATOR_VERSION_ANNOTATION) else {
                continue;
            };
            info!(
                "Got version requirement {}={} from {} {}",
                MIN_OPERATOR_VERSION_ANNOTATION,
                needed,
                obj.group_kind(),
                obj.name().unwrap_or_default()
            );

            let needed = match Version::from_str(needed) {
                Ok(v) => v,
                Err(e) => {
                    error!("Unable to parse version restriction {:?}: {}", needed, e);
                    return Err(GateError::parse(needed, e));
                }
            };

            if needed > required {
                required = needed;
            }
        }

        Ok(required)
    }

    pub fn evaluate(&self, objs: &Objects) -> GateResult<GateVerdict> {
        let required = self.required_version(objs)?;
        Ok(GateVerdict {
            satisfied: self.operator_version >= required,
            required,
            operator: self.operator_version.clone(),
        })
    }
}

impl<C: Send + Sync> VersionCheckHook for VersionCheck<C> {
    fn version_check(
        &self,
        ctx: &ReconcileContext,
        src: &mut dyn DeclarativeObject,
        objs: &Objects,
    ) -> GateResult<bool> {
        let verdict = self.evaluate(objs)?;
        if verdict.satisfied {
            debug!(
                "{}: operator {} satisfies required version {}",
                ctx.request(),
                verdict.operator,
                verdict.required
            );
            return Ok(true);
        }

        let type_name = src.type_name();
        let addon = match src.as_common_object() {
            Some(v) => v,
            None => return Err(GateError::TypeMismatch { type_name }),
        };

        let status = CommonStatus::unhealthy(verdict.message());
        info!(
            "{}: updating status of {}: {:?}",
            ctx.request(),
            addon.name(),
            status
        );
        addon.set_common_status(status);

        Err(GateError::VersionMismatch {
            required: verdict.required,
            actual: verdict.operator,
        })
    }
}
