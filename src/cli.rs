// Copyright 2025 Fernando Borretti
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

use std::process::exit;

use clap::Parser;
use ngflash_core::error::Fallible;
use tokio::spawn;

use crate::cmd::catalog::CatalogFormat;
use crate::cmd::catalog::print_catalog;
use crate::cmd::check::check_content;
use crate::cmd::serve::server::DEFAULT_QUESTION_COUNT;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Run the quiz and the lesson reader through a web interface.
    Serve {
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
        /// Seed for shuffling questions. By default, the clock is used.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of questions preselected on the quiz setup form.
        #[arg(long, default_value_t = DEFAULT_QUESTION_COUNT)]
        count: usize,
    },
    /// Validate the built-in questions and lessons.
    Check,
    /// Print what the built-in content covers.
    Catalog {
        /// Which output format to use.
        #[arg(long, default_value_t = CatalogFormat::Text)]
        format: CatalogFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            host,
            port,
            open_browser,
            seed,
            count,
        } => {
            if open_browser.unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let url = format!("http://{browser_host}:{port}/");
                            if let Err(e) = open::that(&url) {
                                log::warn!("Failed to open {url}: {e}");
                            }
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                host,
                port,
                seed,
                default_count: count,
            };
            start_server(config).await
        }
        Command::Check => check_content(),
        Command::Catalog { format } => print_catalog(format),
    }
}
