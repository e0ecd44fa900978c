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

//! Commands that read and rewrite YAML files.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CoreCommands {
    /// Check that a file reads as YAML
    Validate {
        #[arg(value_name = "FILE")]
        file: String,

        /// Keep aliases without a matching anchor as text
        #[arg(long)]
        lenient: bool,
    },

    /// Write a file in canonical form
    Format {
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Spaces per nesting level (2 to 9)
        #[arg(long, default_value_t = 2)]
        indent: usize,

        /// Double-quote every string scalar
        #[arg(long)]
        quote_always: bool,

        /// Drop comments from the output
        #[arg(long)]
        strip_comments: bool,

        /// Only check whether the file is already canonical
        #[arg(short, long)]
        check: bool,
    },

    /// Print the kind and size of each document
    Inspect {
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl CoreCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { file, lenient } => commands::validate(&file, lenient),
            CoreCommands::Format {
                file,
                output,
                indent,
                quote_always,
                strip_comments,
                check,
            } => {
                let options = commands::FormatOptions {
                    indent,
                    quote_always,
                    strip_comments,
                    check,
                };
                commands::format(&file, output.as_deref(), &options)
            }
            CoreCommands::Inspect { file } => commands::inspect(&file),
        }
    }
}
