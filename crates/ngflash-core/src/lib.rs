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

//! ngflash-core: Core library for the ngflash Angular learning tool.
//!
//! This library is I/O free and WASM-compatible. It provides:
//! - The built-in question bank and lessons
//! - The quiz session state machine
//! - The lesson navigator of the knowledge reader
//! - Markdown to HTML rendering for lesson text

pub mod content;
pub mod error;
pub mod markdown;
pub mod quiz;
pub mod reader;
pub mod rng;
pub mod types;

// Re-exports for convenience
pub use content::Catalog;
pub use error::{ErrorReport, Fallible, fail};
pub use quiz::{AnsweredQuestion, GameState, QuizSession, QuizSummary};
pub use reader::LessonNavigator;
pub use types::filter::Filter;
pub use types::lesson::{CodeExample, Lesson, LessonSection};
pub use types::question::{Category, Difficulty, Question};
