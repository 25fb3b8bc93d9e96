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

use addon_common::api::{Addon, DeclarativeObject};
use addon_common::conf::OperatorConf;
use addon_common::manifest::Objects;
use addon_common::GateResult;
use addon_operator::{ReconcileContext, VersionCheck, VersionCheckHook};
use clap::Args;
use log::info;
use serde_json::{json, Value};
use std::path::Path;

#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Rendered manifest, a multi-document yaml file
    pub manifest: String,

    /// Addon object the manifest belongs to (yaml)
    #[arg(long)]
    pub target: Option<String>,
}

impl CheckCommand {
    pub fn execute(&self, conf: &OperatorConf) -> GateResult<()> {
        let (report, result) = self.run(conf)?;
        println!("{:#}", report);
        result
    }

    // The report is produced for passing and failing checks alike.
    fn run(&self, conf: &OperatorConf) -> GateResult<(Value, GateResult<()>)> {
        let objs = Objects::from_file(&self.manifest)?;
        let mut addon = match &self.target {
            Some(path) => Addon::from_file(path)?,
            None => Addon::new(self.default_name()),
        };

        let check = VersionCheck::new((), &conf.operator_version)?;
        let verdict = check.evaluate(&objs)?;

        let ctx = ReconcileContext::new(format!(
            "{}/{}",
            addon.namespace().unwrap_or("default"),
            addon.name()
        ));
        info!(
            "checking {} objects from {} for {}",
            objs.len(),
            self.manifest,
            ctx.request()
        );
        let result = check.version_check(&ctx, &mut addon, &objs).map(|_| ());

        let report = json!({
            "addon": ctx.request(),
            "objects": objs.len(),
            "satisfied": verdict.satisfied,
            "requiredVersion": verdict.required,
            "operatorVersion": verdict.operator,
            "suggestion": verdict.suggestion(),
            "status": addon.status,
        });

        Ok((report, result))
    }

    fn default_name(&self) -> String {
        Path::new(&self.manifest)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "addon".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addon_common::GateError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MANIFEST: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: metrics-server
  annotations:
    addons.k8s.io/min-operator-version: "1.3.0"
---
apiVersion: v1
kind: Service
metadata:
  name: metrics-server
"#;

    fn write(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn conf(version: &str) -> OperatorConf {
        OperatorConf {
            operator_version: version.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_check_passes() {
        let manifest = write(MANIFEST);
        let cmd = CheckCommand {
            manifest: manifest.path().display().to_string(),
            target: None,
        };

        let (report, result) = cmd.run(&conf("1.3.0")).unwrap();
        assert!(result.is_ok());
        assert_eq!(report["satisfied"], true);
        assert_eq!(report["objects"], 2);
        assert_eq!(report["requiredVersion"], "1.3.0");
        assert!(report["status"].is_null());
    }

    #[test]
    fn test_check_fails_and_reports_status() {
        let manifest = write(MANIFEST);
        let target = write(
            r#"
apiVersion: addons.k8s.io/v1alpha1
kind: Addon
metadata:
  name: metrics
  namespace: monitoring
"#,
        );
        let cmd = CheckCommand {
            manifest: manifest.path().display().to_string(),
            target: Some(target.path().display().to_string()),
        };

        let (report, result) = cmd.run(&conf("1.2.9")).unwrap();
        assert!(matches!(result, Err(GateError::VersionMismatch { .. })));
        assert_eq!(report["addon"], "monitoring/metrics");
        assert_eq!(report["satisfied"], false);
        assert_eq!(report["status"]["healthy"], false);
        assert_eq!(
            report["status"]["errors"][0],
            "manifest needs operator version >= 1.3.0, this operator is version 1.2.9"
        );
    }

    #[test]
    fn test_check_bad_annotation() {
        let manifest = write(
            "kind: ConfigMap\nmetadata:\n  name: x\n  annotations:\n    addons.k8s.io/min-operator-version: latest\n",
        );
        let cmd = CheckCommand {
            manifest: manifest.path().display().to_string(),
            target: None,
        };

        assert!(matches!(
            cmd.run(&conf("1.0.0")),
            Err(GateError::Parse { .. })
        ));
    }
}
