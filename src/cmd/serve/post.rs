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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use chrono::Local;
use ngflash_core::Category;
use ngflash_core::Difficulty;
use ngflash_core::Filter;
use serde::Deserialize;

use crate::cmd::serve::state::MutableState;
use crate::cmd::serve::state::ServerState;

#[derive(Deserialize)]
pub struct MenuForm {
    action: String,
}

#[derive(Deserialize)]
pub struct QuizForm {
    action: String,
    category: Option<String>,
    difficulty: Option<String>,
    count: Option<String>,
    answer: Option<String>,
}

#[derive(Deserialize)]
pub struct LearnForm {
    action: String,
    lesson: Option<String>,
    section: Option<String>,
}

pub async fn menu_post_handler(
    State(state): State<ServerState>,
    Form(form): Form<MenuForm>,
) -> Redirect {
    if form.action == "Shutdown" {
        state.shutdown();
    }
    Redirect::to("/")
}

pub async fn quiz_post_handler(
    State(state): State<ServerState>,
    Form(form): Form<QuizForm>,
) -> Redirect {
    let mut m = state.lock();
    match form.action.as_str() {
        "Start" => start_quiz(&mut m, &form, state.default_count),
        "Answer" => {
            if let Some(selected) = parse_index(form.answer.as_deref()) {
                m.quiz.answer_question(selected);
            }
        }
        "Next" => {
            m.quiz.next_question();
            if m.quiz.state().is_finished && m.quiz_finished_at.is_none() {
                m.quiz_finished_at = Some(Local::now());
            }
        }
        "Reset" => {
            m.quiz.reset_game();
            m.quiz_started_at = None;
            m.quiz_finished_at = None;
        }
        other => log::debug!("Ignoring unknown quiz action '{other}'"),
    }
    Redirect::to("/quiz")
}

pub async fn learn_post_handler(
    State(state): State<ServerState>,
    Form(form): Form<LearnForm>,
) -> Redirect {
    let mut m = state.lock();
    let reader = &mut m.reader;
    match form.action.as_str() {
        "Open" => {
            if let Some(id) = form.lesson.as_deref() {
                reader.select_lesson(id);
            }
        }
        "Next" => reader.next_section(),
        "Previous" => reader.previous_section(),
        "Goto" => {
            if let Some(index) = parse_index(form.section.as_deref()) {
                reader.go_to_section(index);
            }
        }
        "NextLesson" => {
            reader.go_to_next_lesson();
        }
        "PreviousLesson" => {
            reader.go_to_previous_lesson();
        }
        "Back" => reader.deselect(),
        other => log::debug!("Ignoring unknown reader action '{other}'"),
    }
    Redirect::to("/learn")
}

fn start_quiz(m: &mut MutableState, form: &QuizForm, default_count: usize) {
    // Unparseable filters fall back to the wildcard.
    let category: Filter<Category> = form
        .category
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    let difficulty: Filter<Difficulty> = form
        .difficulty
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    let count = parse_index(form.count.as_deref()).unwrap_or(default_count);
    m.quiz.start_game(category, difficulty, count, &mut m.rng);
    m.quiz_started_at = Some(Local::now());
    m.quiz_finished_at = None;
}

fn parse_index(value: Option<&str>) -> Option<usize> {
    value.and_then(|v| v.trim().parse().ok())
}
