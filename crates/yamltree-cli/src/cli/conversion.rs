// Dweve Yamltree - Immutable YAML Document Engine
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JSON conversion commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert a YAML file to JSON
    ToJson {
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Indent the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Convert a JSON file to canonical YAML
    FromJson {
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl ConversionCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::ToJson {
                file,
                output,
                pretty,
            } => commands::to_json(&file, output.as_deref(), pretty),
            ConversionCommands::FromJson { file, output } => {
                commands::from_json(&file, output.as_deref())
            }
        }
    }
}
