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
use std::sync::MutexGuard;
use std::sync::PoisonError;

use chrono::DateTime;
use chrono::Local;
use ngflash_core::LessonNavigator;
use ngflash_core::QuizSession;
use ngflash_core::rng::TinyRng;
use tokio::sync::oneshot::Sender;

#[derive(Clone)]
pub struct ServerState {
    /// Question count preselected on the quiz setup form.
    pub default_count: usize,
    pub mutable: Arc<Mutex<MutableState>>,
    pub shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}

pub struct MutableState {
    pub quiz: QuizSession,
    pub reader: LessonNavigator,
    pub rng: TinyRng,
    pub quiz_started_at: Option<DateTime<Local>>,
    pub quiz_finished_at: Option<DateTime<Local>>,
}

impl ServerState {
    /// Lock the mutable state. State transitions replace whole values, so a
    /// poisoned lock still holds a consistent state.
    pub fn lock(&self) -> MutexGuard<'_, MutableState> {
        self.mutable.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn shutdown(&self) {
        let sender = self
            .shutdown_tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(tx) = sender {
            let _ = tx.send(());
        }
    }
}

impl MutableState {
    pub fn new(quiz: QuizSession, reader: LessonNavigator, rng: TinyRng) -> Self {
        Self {
            quiz,
            reader,
            rng,
            quiz_started_at: None,
            quiz_finished_at: None,
        }
    }
}
