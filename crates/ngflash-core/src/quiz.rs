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

//! The quiz session state machine.

use serde::Serialize;

use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::types::filter::Filter;
use crate::types::question::Category;
use crate::types::question::Difficulty;
use crate::types::question::Question;
use crate::types::question::QuestionId;

/// The record of one answered question. Append-only within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub question_id: QuestionId,
    pub selected_answer: usize,
    pub is_correct: bool,
}

/// Scoring state of a session. Replaced wholesale on every transition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub current_question_index: usize,
    pub score: usize,
    pub total_questions: usize,
    pub answered_questions: Vec<AnsweredQuestion>,
    pub is_finished: bool,
}

/// The end-of-session result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub percent: usize,
    pub message: &'static str,
}

/// A question the player got wrong, with the option they picked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MissedQuestion<'a> {
    pub question: &'a Question,
    pub selected_answer: usize,
}

pub struct QuizSession {
    /// The full question bank.
    bank: Vec<Question>,
    /// The filtered, shuffled, truncated subset for the current session.
    questions: Vec<Question>,
    state: GameState,
}

impl QuizSession {
    pub fn new(bank: Vec<Question>) -> Self {
        Self {
            bank,
            questions: Vec::new(),
            state: GameState::default(),
        }
    }

    pub fn bank(&self) -> &[Question] {
        &self.bank
    }

    /// The number of questions in the bank matching the filters.
    pub fn available(&self, category: Filter<Category>, difficulty: Filter<Difficulty>) -> usize {
        self.bank
            .iter()
            .filter(|q| category.matches(&q.category) && difficulty.matches(&q.difficulty))
            .count()
    }

    /// Start a new session with up to `count` questions matching both filters.
    pub fn start_game(
        &mut self,
        category: Filter<Category>,
        difficulty: Filter<Difficulty>,
        count: usize,
        rng: &mut TinyRng,
    ) {
        let filtered: Vec<Question> = self
            .bank
            .iter()
            .filter(|q| category.matches(&q.category) && difficulty.matches(&q.difficulty))
            .cloned()
            .collect();
        let mut selected = shuffle(filtered, rng);
        selected.truncate(count);
        log::debug!(
            "Starting quiz: category={category} difficulty={difficulty} questions={}",
            selected.len()
        );
        self.state = GameState {
            total_questions: selected.len(),
            ..GameState::default()
        };
        self.questions = selected;
    }

    /// Record an answer for the current question and return whether it was
    /// correct. Without an unanswered active question this does nothing and
    /// returns `false`.
    pub fn answer_question(&mut self, selected: usize) -> bool {
        if self.current_answer().is_some() {
            return false;
        }
        let Some(question) = self.current_question() else {
            return false;
        };
        let record = AnsweredQuestion {
            question_id: question.id,
            selected_answer: selected,
            is_correct: question.is_correct(selected),
        };
        let mut answered_questions = self.state.answered_questions.clone();
        answered_questions.push(record);
        self.state = GameState {
            score: self.state.score + usize::from(record.is_correct),
            answered_questions,
            ..self.state.clone()
        };
        record.is_correct
    }

    /// Advance to the next question, or finish the session when already on
    /// the last one.
    pub fn next_question(&mut self) {
        let total = self.state.total_questions;
        if total == 0 || self.state.is_finished {
            return;
        }
        let index = self.state.current_question_index;
        self.state = if index + 1 < total {
            GameState {
                current_question_index: index + 1,
                ..self.state.clone()
            }
        } else {
            GameState {
                is_finished: true,
                ..self.state.clone()
            }
        };
    }

    pub fn reset_game(&mut self) {
        self.questions.clear();
        self.state = GameState::default();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_active(&self) -> bool {
        self.state.total_questions > 0
    }

    /// The question at the current index, while the session is running.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.is_finished {
            return None;
        }
        self.questions.get(self.state.current_question_index)
    }

    /// The answer recorded for the current question, if any.
    pub fn current_answer(&self) -> Option<&AnsweredQuestion> {
        let question = self.current_question()?;
        self.state
            .answered_questions
            .iter()
            .find(|a| a.question_id == question.id)
    }

    pub fn is_last_question(&self) -> bool {
        self.state.total_questions > 0
            && self.state.current_question_index + 1 == self.state.total_questions
    }

    /// Percentage of questions answered, rounded down.
    pub fn progress(&self) -> usize {
        percent(
            self.state.answered_questions.len(),
            self.state.total_questions,
        )
    }

    pub fn summary(&self) -> QuizSummary {
        let score = self.state.score;
        let total = self.state.total_questions;
        let percent = percent(score, total);
        let message = match percent {
            90.. => "Outstanding! You really know your Angular.",
            70..=89 => "Great job! Just a few gaps left.",
            50..=69 => "Good effort. Review the lessons and try again.",
            _ => "Keep learning. The reader is a good place to start.",
        };
        QuizSummary {
            score,
            total,
            percent,
            message,
        }
    }

    /// Questions answered incorrectly, in the order they were asked.
    pub fn missed_questions(&self) -> Vec<MissedQuestion<'_>> {
        self.state
            .answered_questions
            .iter()
            .filter(|a| !a.is_correct)
            .filter_map(|a| {
                self.questions
                    .iter()
                    .find(|q| q.id == a.question_id)
                    .map(|question| MissedQuestion {
                        question,
                        selected_answer: a.selected_answer,
                    })
            })
            .collect()
    }
}

fn percent(part: usize, total: usize) -> usize {
    if total == 0 { 0 } else { part * 100 / total }
}
