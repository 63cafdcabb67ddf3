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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

pub type QuestionId = u32;

/// The topic a question or lesson belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Components,
    Directives,
    Services,
    Routing,
    Forms,
    Signals,
    Rxjs,
    Pipes,
    Lifecycle,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Components,
        Category::Directives,
        Category::Services,
        Category::Routing,
        Category::Forms,
        Category::Signals,
        Category::Rxjs,
        Category::Pipes,
        Category::Lifecycle,
    ];

    /// The machine name, as used in content files and form values.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Components => "components",
            Category::Directives => "directives",
            Category::Services => "services",
            Category::Routing => "routing",
            Category::Forms => "forms",
            Category::Signals => "signals",
            Category::Rxjs => "rxjs",
            Category::Pipes => "pipes",
            Category::Lifecycle => "lifecycle",
        }
    }

    /// The human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Components => "Components",
            Category::Directives => "Directives",
            Category::Services => "Services & DI",
            Category::Routing => "Routing",
            Category::Forms => "Forms",
            Category::Signals => "Signals",
            Category::Rxjs => "RxJS",
            Category::Pipes => "Pipes",
            Category::Lifecycle => "Lifecycle Hooks",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ErrorReport::new(format!("unknown category: '{s}'.")))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ErrorReport::new(format!("unknown difficulty: '{s}'.")))
    }
}

/// A multiple-choice question. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn is_correct(&self, selected: usize) -> bool {
        self.correct_answer == selected
    }

    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct_answer)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = "angularjs".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "error: unknown category: 'angularjs'.");
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("advanced".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_names_match_as_str() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Category::Rxjs)?, "\"rxjs\"");
        assert_eq!(
            serde_json::to_string(&Difficulty::Intermediate)?,
            "\"intermediate\""
        );
        Ok(())
    }
}
