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

mod cmds;
mod commands;

use addon_common::conf::OperatorConf;
use addon_common::version;
use addon_common::{GateResult, Logger};
use clap::Parser;
use commands::Commands;

#[derive(Parser, Debug)]
#[command(author, version = version::VERSION, about, long_about = None)]
pub struct AddonArgs {
    /// Configuration file path (optional)
    #[arg(
        short,
        long,
        help = "Configuration file path (optional)",
        global = true
    )]
    pub conf: Option<String>,

    /// Operator version to check manifests against (e.g., '1.4.0')
    #[arg(
        long,
        help = "Operator version to check manifests against (e.g., '1.4.0')",
        global = true
    )]
    pub operator_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl AddonArgs {
    pub fn get_conf(&self) -> GateResult<OperatorConf> {
        let mut conf = OperatorConf::load(self.conf.as_deref())?;

        if let Some(v) = &self.operator_version {
            conf.operator_version = v.clone();
            conf.init()?;
        }

        Ok(conf)
    }
}

fn main() -> GateResult<()> {
    let args = AddonArgs::parse();

    let conf = args.get_conf()?;
    Logger::init(conf.log.clone());

    let result = match &args.command {
        Commands::Check(cmd) => cmd.execute(&conf),
        Commands::Version => {
            println!("addon-cli {}", version::VERSION);
            Ok(())
        }
    };

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }

    result
}
