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

use serde::Deserialize;
use serde::Serialize;

use crate::types::question::Category;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeExample {
    /// Highlighting language, e.g. `typescript` or `html`.
    pub language: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// One navigable page of a lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonSection {
    pub title: String,
    /// Free text with lightweight Markdown markup.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<CodeExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub icon: String,
    pub sections: Vec<LessonSection>,
}

impl Lesson {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
