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

use crate::conf::LogConf;
use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

static INITIALIZED: OnceCell<()> = OnceCell::new();

// Flushes the rolling file writer on drop, so it lives as long as the process.
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Process wide logging setup. Library code logs through the `log` macros,
/// which are forwarded into a `tracing` subscriber.
pub struct Logger;

impl Logger {
    /// Install the global subscriber. Only the first call has any effect.
    pub fn init(conf: LogConf) {
        INITIALIZED.get_or_init(|| {
            if let Err(e) = Self::try_init(&conf) {
                eprintln!("failed to initialize logger: {}", e);
            }
        });
    }

    fn try_init(conf: &LogConf) -> InitResult {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&conf.level)?,
        };

        LogTracer::init()?;

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(conf.display_target)
            .with_ansi(false);

        match &conf.log_dir {
            Some(dir) => {
                let appender = tracing_appender::rolling::daily(dir, &conf.file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                tracing::subscriber::set_global_default(builder.with_writer(writer).finish())?;
                let _ = FILE_GUARD.set(guard);
            }

            None => {
                tracing::subscriber::set_global_default(
                    builder.with_writer(std::io::stderr).finish(),
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        Logger::init(LogConf::default());
        Logger::init(LogConf {
            level: "debug".to_string(),
            ..Default::default()
        });
        log::info!("logger initialized");
        assert!(INITIALIZED.get().is_some());
    }
}
