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

use clap::ValueEnum;
use ngflash_core::Catalog;
use ngflash_core::Category;
use ngflash_core::Difficulty;
use ngflash_core::error::Fallible;
use serde::Serialize;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum CatalogFormat {
    /// Plain text tables.
    Text,
    /// JSON, for scripts.
    Json,
}

impl Display for CatalogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogFormat::Text => write!(f, "text"),
            CatalogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct CatalogSummary {
    total_questions: usize,
    categories: Vec<CategoryRow>,
    lessons: Vec<LessonRow>,
}

#[derive(Serialize)]
struct CategoryRow {
    category: Category,
    label: &'static str,
    beginner: usize,
    intermediate: usize,
    advanced: usize,
}

#[derive(Serialize)]
struct LessonRow {
    id: String,
    title: String,
    category: Category,
    sections: usize,
}

pub fn print_catalog(format: CatalogFormat) -> Fallible<()> {
    let catalog = Catalog::builtin()?;
    let summary = summarize(&catalog);
    let output = match format {
        CatalogFormat::Text => render_text(&summary),
        CatalogFormat::Json => serde_json::to_string_pretty(&summary)?,
    };
    println!("{output}");
    Ok(())
}

fn summarize(catalog: &Catalog) -> CatalogSummary {
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryRow {
            category,
            label: category.label(),
            beginner: catalog.count_questions(category, Difficulty::Beginner),
            intermediate: catalog.count_questions(category, Difficulty::Intermediate),
            advanced: catalog.count_questions(category, Difficulty::Advanced),
        })
        .collect();
    let lessons = catalog
        .lessons
        .iter()
        .map(|lesson| LessonRow {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            category: lesson.category,
            sections: lesson.section_count(),
        })
        .collect();
    CatalogSummary {
        total_questions: catalog.questions.len(),
        categories,
        lessons,
    }
}

fn render_text(summary: &CatalogSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<18} {:>9} {:>13} {:>9}\n",
        "Category", "beginner", "intermediate", "advanced"
    ));
    for row in &summary.categories {
        out.push_str(&format!(
            "{:<18} {:>9} {:>13} {:>9}\n",
            row.label, row.beginner, row.intermediate, row.advanced
        ));
    }
    out.push_str(&format!("Total: {} questions\n\n", summary.total_questions));
    out.push_str("Lessons:\n");
    for lesson in &summary.lessons {
        out.push_str(&format!(
            "  {:<22} {} ({} sections)\n",
            lesson.id, lesson.title, lesson.sections
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_add_up() -> Fallible<()> {
        let catalog = Catalog::builtin()?;
        let summary = summarize(&catalog);
        let total: usize = summary
            .categories
            .iter()
            .map(|r| r.beginner + r.intermediate + r.advanced)
            .sum();
        assert_eq!(total, summary.total_questions);
        assert_eq!(summary.categories.len(), 9);
        Ok(())
    }

    #[test]
    fn test_render_text() -> Fallible<()> {
        let catalog = Catalog::builtin()?;
        let text = render_text(&summarize(&catalog));
        assert!(text.starts_with("Category"));
        assert!(text.contains("Total: 40 questions"));
        assert!(text.contains("components"));
        Ok(())
    }

    #[test]
    fn test_json_shape() -> Fallible<()> {
        let catalog = Catalog::builtin()?;
        let json = serde_json::to_value(summarize(&catalog))?;
        assert_eq!(json["total_questions"], 40);
        assert_eq!(json["categories"][0]["category"], "components");
        assert_eq!(json["lessons"][0]["id"], "components");
        Ok(())
    }
}
