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

//! The built-in question bank and lessons, compiled into the binary.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::lesson::Lesson;
use crate::types::question::Category;
use crate::types::question::Difficulty;
use crate::types::question::OPTION_COUNT;
use crate::types::question::Question;

const QUESTIONS_TOML: &str = include_str!("../content/questions.toml");
const LESSONS_TOML: &str = include_str!("../content/lessons.toml");

#[derive(Deserialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct LessonFile {
    lessons: Vec<Lesson>,
}

/// All the content the application presents.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub lessons: Vec<Lesson>,
}

impl Catalog {
    /// Load and validate the embedded content.
    pub fn builtin() -> Fallible<Self> {
        Ok(Self {
            questions: parse_questions(QUESTIONS_TOML)?,
            lessons: parse_lessons(LESSONS_TOML)?,
        })
    }

    pub fn count_questions(&self, category: Category, difficulty: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category == category && q.difficulty == difficulty)
            .count()
    }
}

pub fn parse_questions(text: &str) -> Fallible<Vec<Question>> {
    let file: QuestionFile = toml::from_str(text)?;
    let mut seen = HashSet::new();
    for question in &file.questions {
        if !seen.insert(question.id) {
            return fail(format!("duplicate question id: {}.", question.id));
        }
        if question.options.len() != OPTION_COUNT {
            return fail(format!(
                "question {} has {} options, expected {OPTION_COUNT}.",
                question.id,
                question.options.len()
            ));
        }
        if question.correct_answer >= OPTION_COUNT {
            return fail(format!(
                "question {} marks option {} as correct, which does not exist.",
                question.id, question.correct_answer
            ));
        }
    }
    Ok(file.questions)
}

pub fn parse_lessons(text: &str) -> Fallible<Vec<Lesson>> {
    let file: LessonFile = toml::from_str(text)?;
    let mut seen = HashSet::new();
    for lesson in &file.lessons {
        if !seen.insert(lesson.id.as_str()) {
            return Err(ErrorReport::new(format!(
                "duplicate lesson id: '{}'.",
                lesson.id
            )));
        }
        if lesson.sections.is_empty() {
            return fail(format!("lesson '{}' has no sections.", lesson.id));
        }
    }
    Ok(file.lessons)
}
