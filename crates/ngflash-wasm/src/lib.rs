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

//! WASM bindings for ngflash - runs the quiz and the reader in the browser.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

use ngflash_core::markdown::markdown_to_html;
use ngflash_core::rng::TinyRng;
use ngflash_core::{Catalog, Category, Difficulty, Filter, LessonNavigator, QuizSession};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"ngflash WASM initialized".into());
}

/// The application state managed from JavaScript.
#[wasm_bindgen]
pub struct NgflashApp {
    quiz: QuizSession,
    reader: LessonNavigator,
    rng: TinyRng,
}

#[derive(Serialize)]
struct Label {
    value: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct SectionView {
    lesson_id: String,
    lesson_title: String,
    title: String,
    html: String,
    position: usize,
    count: usize,
    is_last: bool,
}

#[wasm_bindgen]
impl NgflashApp {
    /// Create a new NgflashApp instance from the built-in content.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<NgflashApp, JsValue> {
        let catalog = Catalog::builtin().map_err(to_js)?;
        Ok(Self {
            quiz: QuizSession::new(catalog.questions),
            reader: LessonNavigator::new(catalog.lessons),
            rng: TinyRng::from_seed(js_sys::Date::now() as u64),
        })
    }

    /// Start a quiz. `category` and `difficulty` accept `"all"`.
    /// Returns the number of questions in the session.
    #[wasm_bindgen]
    pub fn start_game(
        &mut self,
        category: &str,
        difficulty: &str,
        count: usize,
    ) -> Result<usize, JsValue> {
        let category: Filter<Category> = category.parse().map_err(to_js)?;
        let difficulty: Filter<Difficulty> = difficulty.parse().map_err(to_js)?;
        self.quiz
            .start_game(category, difficulty, count, &mut self.rng);
        Ok(self.quiz.state().total_questions)
    }

    #[wasm_bindgen]
    pub fn answer_question(&mut self, selected: usize) -> bool {
        self.quiz.answer_question(selected)
    }

    #[wasm_bindgen]
    pub fn next_question(&mut self) {
        self.quiz.next_question();
    }

    #[wasm_bindgen]
    pub fn reset_game(&mut self) {
        self.quiz.reset_game();
    }

    /// Percentage of the session answered.
    #[wasm_bindgen]
    pub fn progress(&self) -> usize {
        self.quiz.progress()
    }

    #[wasm_bindgen]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.quiz.state()).map_err(to_js)
    }

    /// The current question as JSON, or `null` when there is none.
    #[wasm_bindgen]
    pub fn current_question_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.quiz.current_question()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn summary_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.quiz.summary()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn categories_json(&self) -> Result<String, JsValue> {
        let labels: Vec<Label> = Category::ALL
            .into_iter()
            .map(|c| Label {
                value: c.as_str(),
                label: c.label(),
            })
            .collect();
        serde_json::to_string(&labels).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn difficulties_json(&self) -> Result<String, JsValue> {
        let labels: Vec<Label> = Difficulty::ALL
            .into_iter()
            .map(|d| Label {
                value: d.as_str(),
                label: d.label(),
            })
            .collect();
        serde_json::to_string(&labels).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn lessons_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.reader.lessons()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn select_lesson(&mut self, id: &str) -> bool {
        self.reader.select_lesson(id)
    }

    #[wasm_bindgen]
    pub fn deselect_lesson(&mut self) {
        self.reader.deselect();
    }

    #[wasm_bindgen]
    pub fn next_section(&mut self) {
        self.reader.next_section();
    }

    #[wasm_bindgen]
    pub fn previous_section(&mut self) {
        self.reader.previous_section();
    }

    #[wasm_bindgen]
    pub fn go_to_section(&mut self, index: usize) {
        self.reader.go_to_section(index);
    }

    #[wasm_bindgen]
    pub fn next_lesson(&mut self) -> bool {
        self.reader.go_to_next_lesson()
    }

    #[wasm_bindgen]
    pub fn previous_lesson(&mut self) -> bool {
        self.reader.go_to_previous_lesson()
    }

    /// The open section with its content rendered to HTML, as JSON. `null`
    /// when no lesson is open.
    #[wasm_bindgen]
    pub fn current_section_json(&self) -> Result<String, JsValue> {
        let view = match (self.reader.current_lesson(), self.reader.current_section()) {
            (Some(lesson), Some(section)) => Some(SectionView {
                lesson_id: lesson.id.clone(),
                lesson_title: lesson.title.clone(),
                title: section.title.clone(),
                html: markdown_to_html(&section.content),
                position: self.reader.section_index() + 1,
                count: lesson.section_count(),
                is_last: self.reader.is_last_section(),
            }),
            _ => None,
        };
        serde_json::to_string(&view).map_err(to_js)
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
