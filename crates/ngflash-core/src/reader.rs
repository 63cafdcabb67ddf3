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

//! Navigation through the lessons of the knowledge reader.

use crate::types::lesson::Lesson;
use crate::types::lesson::LessonSection;
use crate::types::question::Category;

pub struct LessonNavigator {
    lessons: Vec<Lesson>,
    /// Index into `lessons` of the open lesson.
    selected: Option<usize>,
    section: usize,
}

impl LessonNavigator {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons,
            selected: None,
            section: 0,
        }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn lessons_in(&self, category: Category) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter().filter(move |l| l.category == category)
    }

    /// Open the lesson with the given id at its first section. Unknown ids
    /// leave the navigator untouched.
    pub fn select_lesson(&mut self, id: &str) -> bool {
        match self.lessons.iter().position(|l| l.id == id) {
            Some(index) => {
                log::debug!("Opening lesson '{id}'");
                self.open(index);
                true
            }
            None => false,
        }
    }

    /// Close the open lesson and go back to the list.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.section = 0;
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.selected.and_then(|i| self.lessons.get(i))
    }

    pub fn current_section(&self) -> Option<&LessonSection> {
        self.current_lesson()?.sections.get(self.section)
    }

    pub fn section_index(&self) -> usize {
        self.section
    }

    /// The 1-based position of the current section and the section count.
    pub fn section_progress(&self) -> Option<(usize, usize)> {
        let lesson = self.current_lesson()?;
        Some((self.section + 1, lesson.section_count()))
    }

    pub fn next_section(&mut self) {
        if !self.is_last_section() && self.current_lesson().is_some() {
            self.section += 1;
        }
    }

    pub fn previous_section(&mut self) {
        self.section = self.section.saturating_sub(1);
    }

    /// Jump to a section; indices past the end land on the last section.
    pub fn go_to_section(&mut self, index: usize) {
        if let Some(lesson) = self.current_lesson() {
            self.section = index.min(lesson.section_count().saturating_sub(1));
        }
    }

    pub fn is_first_section(&self) -> bool {
        self.section == 0
    }

    pub fn is_last_section(&self) -> bool {
        match self.current_lesson() {
            Some(lesson) => self.section + 1 >= lesson.section_count(),
            None => false,
        }
    }

    pub fn next_lesson(&self) -> Option<&Lesson> {
        let index = self.selected?;
        self.lessons.get(index + 1)
    }

    pub fn previous_lesson(&self) -> Option<&Lesson> {
        let index = self.selected?;
        index.checked_sub(1).and_then(|i| self.lessons.get(i))
    }

    pub fn go_to_next_lesson(&mut self) -> bool {
        match self.selected {
            Some(index) if index + 1 < self.lessons.len() => {
                self.open(index + 1);
                true
            }
            _ => false,
        }
    }

    pub fn go_to_previous_lesson(&mut self) -> bool {
        match self.selected {
            Some(index) if index > 0 => {
                self.open(index - 1);
                true
            }
            _ => false,
        }
    }

    fn open(&mut self, index: usize) {
        self.selected = Some(index);
        self.section = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::error::Fallible;

    fn section(title: &str) -> LessonSection {
        LessonSection {
            title: title.to_string(),
            content: String::new(),
            code_example: None,
            tips: Vec::new(),
        }
    }

    fn lesson(id: &str, sections: usize) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: Category::Components,
            icon: "*".to_string(),
            sections: (0..sections).map(|i| section(&format!("s{i}"))).collect(),
        }
    }

    fn make_navigator() -> LessonNavigator {
        LessonNavigator::new(vec![lesson("a", 3), lesson("b", 1), lesson("c", 2)])
    }

    #[test]
    fn test_select_lesson() {
        let mut nav = make_navigator();
        assert!(nav.current_lesson().is_none());
        assert!(nav.select_lesson("b"));
        assert_eq!(nav.current_lesson().map(|l| l.id.as_str()), Some("b"));
        assert_eq!(nav.section_index(), 0);
    }

    #[test]
    fn test_select_unknown_lesson() {
        let mut nav = make_navigator();
        nav.select_lesson("a");
        nav.next_section();
        assert!(!nav.select_lesson("zzz"));
        assert_eq!(nav.current_lesson().map(|l| l.id.as_str()), Some("a"));
        assert_eq!(nav.section_index(), 1);
    }

    #[test]
    fn test_sections_stay_in_bounds() {
        let mut nav = make_navigator();
        nav.select_lesson("a");
        for _ in 0..10 {
            nav.next_section();
            assert!(nav.section_index() < 3);
        }
        assert!(nav.is_last_section());
        assert_eq!(nav.current_section().map(|s| s.title.as_str()), Some("s2"));
        for _ in 0..10 {
            nav.previous_section();
            assert!(nav.section_index() < 3);
        }
        assert!(nav.is_first_section());
        assert!(!nav.is_last_section());
    }

    #[test]
    fn test_go_to_section_clamps() {
        let mut nav = make_navigator();
        nav.select_lesson("c");
        nav.go_to_section(1);
        assert_eq!(nav.section_index(), 1);
        nav.go_to_section(99);
        assert_eq!(nav.section_index(), 1);
        nav.go_to_section(0);
        assert_eq!(nav.section_progress(), Some((1, 2)));
    }

    #[test]
    fn test_navigation_without_lesson_is_noop() {
        let mut nav = make_navigator();
        nav.next_section();
        nav.go_to_section(2);
        assert_eq!(nav.section_index(), 0);
        assert!(!nav.is_last_section());
        assert!(nav.next_lesson().is_none());
        assert!(!nav.go_to_next_lesson());
        assert!(nav.section_progress().is_none());
    }

    #[test]
    fn test_single_section_lesson_is_last() {
        let mut nav = make_navigator();
        nav.select_lesson("b");
        assert!(nav.is_first_section());
        assert!(nav.is_last_section());
        nav.next_section();
        assert_eq!(nav.section_index(), 0);
    }

    #[test]
    fn test_adjacent_lessons() {
        let mut nav = make_navigator();
        nav.select_lesson("a");
        assert!(nav.previous_lesson().is_none());
        assert_eq!(nav.next_lesson().map(|l| l.id.as_str()), Some("b"));
        nav.next_section();
        nav.next_section();
        assert!(nav.go_to_next_lesson());
        assert_eq!(nav.current_lesson().map(|l| l.id.as_str()), Some("b"));
        assert_eq!(nav.section_index(), 0);
        assert!(nav.go_to_next_lesson());
        assert!(!nav.go_to_next_lesson());
        assert_eq!(nav.current_lesson().map(|l| l.id.as_str()), Some("c"));
        assert!(nav.go_to_previous_lesson());
        assert_eq!(nav.previous_lesson().map(|l| l.id.as_str()), Some("a"));
    }

    #[test]
    fn test_deselect() {
        let mut nav = make_navigator();
        nav.select_lesson("c");
        nav.next_section();
        nav.deselect();
        assert!(nav.current_lesson().is_none());
        assert_eq!(nav.section_index(), 0);
    }

    #[test]
    fn test_builtin_lessons_by_category() -> Fallible<()> {
        let nav = LessonNavigator::new(Catalog::builtin()?.lessons);
        let ids: Vec<&str> = nav
            .lessons_in(Category::Signals)
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["signals"]);
        Ok(())
    }
}
