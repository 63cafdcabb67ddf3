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

use std::sync::Arc;
use std::sync::Mutex;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use ngflash_core::Catalog;
use ngflash_core::LessonNavigator;
use ngflash_core::QuizSession;
use ngflash_core::error::Fallible;
use ngflash_core::rng::TinyRng;
use tokio::net::TcpListener;
use tokio::select;
use tokio::signal;
use tokio::sync::oneshot::Receiver;
use tokio::sync::oneshot::channel;

use crate::cmd::serve::get::learn_handler;
use crate::cmd::serve::get::menu_handler;
use crate::cmd::serve::get::quiz_handler;
use crate::cmd::serve::post::learn_post_handler;
use crate::cmd::serve::post::menu_post_handler;
use crate::cmd::serve::post::quiz_post_handler;
use crate::cmd::serve::state::MutableState;
use crate::cmd::serve::state::ServerState;
use crate::utils::CACHE_CONTROL_IMMUTABLE;
use crate::utils::seed_from_clock;

/// Question count used when the setup form does not carry one.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed for question shuffling. By default, seeded from the clock.
    pub seed: Option<u64>,
    pub default_count: usize,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let Catalog { questions, lessons } = Catalog::builtin()?;
    log::debug!(
        "Loaded {} questions and {} lessons",
        questions.len(),
        lessons.len()
    );

    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let rng = TinyRng::from_seed(seed);

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = channel();

    let state = ServerState {
        default_count: config.default_count,
        mutable: Arc::new(Mutex::new(MutableState::new(
            QuizSession::new(questions),
            LessonNavigator::new(lessons),
            rng,
        ))),
        shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
    };
    let app = Router::new();
    let app = app.route("/", get(menu_handler));
    let app = app.route("/", post(menu_post_handler));
    let app = app.route("/quiz", get(quiz_handler));
    let app = app.route("/quiz", post(quiz_post_handler));
    let app = app.route("/learn", get(learn_handler));
    let app = app.route("/learn", post(learn_post_handler));
    let app = app.route("/script.js", get(script_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C or shutdown button.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;
    Ok(())
}

async fn script_handler() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

async fn style_handler() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}

async fn shutdown_signal(shutdown_rx: Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    let shutdown = async {
        shutdown_rx.await.ok();
    };

    select! {
        _ = ctrl_c => {
            log::debug!("Received Ctrl+C, shutting down gracefully");
        },
        _ = shutdown => {
            log::debug!("Received shutdown signal, shutting down gracefully");
        },
    }
}
