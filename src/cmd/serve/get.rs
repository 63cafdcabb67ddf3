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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::PreEscaped;
use maud::html;
use ngflash_core::Category;
use ngflash_core::Difficulty;
use ngflash_core::Filter;
use ngflash_core::Lesson;
use ngflash_core::LessonSection;
use ngflash_core::markdown::markdown_to_html;
use ngflash_core::markdown::markdown_to_html_inline;

use crate::cmd::serve::state::MutableState;
use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::template::Mode;
use crate::cmd::serve::template::page_template;

pub async fn menu_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let m = state.lock();
    let body = render_menu(&m);
    (
        StatusCode::OK,
        Html(page_template(Mode::Menu, body).into_string()),
    )
}

pub async fn quiz_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let m = state.lock();
    let body = if !m.quiz.is_active() {
        render_setup(&state, &m)
    } else if m.quiz.state().is_finished {
        render_results(&m)
    } else {
        render_question(&m)
    };
    (
        StatusCode::OK,
        Html(page_template(Mode::Quiz, body).into_string()),
    )
}

pub async fn learn_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let m = state.lock();
    let body = match m.reader.current_lesson() {
        Some(lesson) => render_lesson(&m, lesson),
        None => render_lesson_list(&m),
    };
    (
        StatusCode::OK,
        Html(page_template(Mode::Learn, body).into_string()),
    )
}

fn render_menu(m: &MutableState) -> Markup {
    let question_count = m.quiz.bank().len();
    let lesson_count = m.reader.lessons().len();
    html! {
        div.menu {
            h1 { "Learn Angular" }
            p.lead { "Test yourself with flashcards, or read through the lessons at your own pace." }
            div.modes {
                a.mode href="/quiz" {
                    span.icon { "🎯" }
                    h2 { "Flashcard Game" }
                    p { (question_count) " multiple-choice questions across " (Category::ALL.len()) " topics." }
                }
                a.mode href="/learn" {
                    span.icon { "📚" }
                    h2 { "Knowledge Reader" }
                    p { (lesson_count) " lessons with examples and tips." }
                }
            }
            div.shutdown-container {
                form action="/" method="post" {
                    input #shutdown .shutdown-button type="submit" name="action" value="Shutdown" title="Shut down the server";
                }
            }
        }
    }
}

fn render_setup(state: &ServerState, m: &MutableState) -> Markup {
    // A session was started but no question matched the filters.
    let no_match = m.quiz_started_at.is_some();
    let bank_size = m.quiz.bank().len();
    html! {
        div.setup {
            h1 { "Flashcard Game" }
            @if no_match {
                p.notice { "No questions match those filters. Try a wider selection." }
            }
            form action="/quiz" method="post" {
                div.field {
                    label for="category" { "Category" }
                    select #category name="category" {
                        option value="all" { "All categories (" (bank_size) ")" }
                        @for category in Category::ALL {
                            option value=(category.as_str()) {
                                (category.label()) " (" (m.quiz.available(Filter::Only(category), Filter::All)) ")"
                            }
                        }
                    }
                }
                div.field {
                    label for="difficulty" { "Difficulty" }
                    select #difficulty name="difficulty" {
                        option value="all" { "All levels" }
                        @for difficulty in Difficulty::ALL {
                            option value=(difficulty.as_str()) { (difficulty.label()) }
                        }
                    }
                }
                div.field {
                    label for="count" { "Questions" }
                    input #count type="number" name="count" min="1" max=(bank_size) value=(state.default_count);
                }
                button #start type="submit" name="action" value="Start" { "Start Quiz" }
            }
        }
    }
}

fn render_question(m: &MutableState) -> Markup {
    let quiz = &m.quiz;
    let game = quiz.state();
    let Some(question) = quiz.current_question() else {
        return html! {};
    };
    let answer = quiz.current_answer();
    let progress_style = format!("width: {}%;", quiz.progress());
    let next_label = if quiz.is_last_question() {
        "See Results"
    } else {
        "Next Question"
    };
    html! {
        div.quiz {
            div.header {
                span.counter { "Question " (game.current_question_index + 1) " of " (game.total_questions) }
                div.progress-bar {
                    div.progress-fill style=(progress_style) {}
                }
                span.score { "Score: " (game.score) }
            }
            div.card {
                div.tags {
                    span.tag { (question.category.label()) }
                    span.tag.difficulty { (question.difficulty.label()) }
                }
                h2.prompt.rich-text { (PreEscaped(markdown_to_html_inline(&question.question))) }
                @match answer {
                    None => {
                        form action="/quiz" method="post" {
                            input type="hidden" name="action" value="Answer";
                            div.options {
                                @for (i, option) in question.options.iter().enumerate() {
                                    button.option type="submit" name="answer" value=(i) title={ "Shortcut: " (i + 1) "." } {
                                        span.key { (i + 1) }
                                        span.rich-text { (PreEscaped(markdown_to_html_inline(option))) }
                                    }
                                }
                            }
                        }
                    }
                    Some(answer) => {
                        div.options {
                            @for (i, option) in question.options.iter().enumerate() {
                                div.option.correct[i == question.correct_answer].incorrect[i == answer.selected_answer && !answer.is_correct].selected[i == answer.selected_answer] {
                                    span.key { (i + 1) }
                                    span.rich-text { (PreEscaped(markdown_to_html_inline(option))) }
                                }
                            }
                        }
                        div.feedback.correct[answer.is_correct].incorrect[!answer.is_correct] {
                            strong {
                                @if answer.is_correct { "Correct!" } @else { "Incorrect." }
                            }
                            div.explanation.rich-text { (PreEscaped(markdown_to_html(&question.explanation))) }
                        }
                        form action="/quiz" method="post" {
                            button #next type="submit" name="action" value="Next" title="Shortcut: enter." { (next_label) }
                        }
                    }
                }
            }
            form.quit action="/quiz" method="post" {
                button #reset type="submit" name="action" value="Reset" title="Abandon this quiz" { "Quit" }
            }
        }
    }
}

fn render_results(m: &MutableState) -> Markup {
    let summary = m.quiz.summary();
    let missed = m.quiz.missed_questions();
    let started = m
        .quiz_started_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    let finished = m
        .quiz_finished_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    let duration = match (m.quiz_started_at, m.quiz_finished_at) {
        (Some(start), Some(end)) => (end - start).num_seconds(),
        _ => 0,
    };
    html! {
        div.finished {
            h1 { "Quiz Completed" }
            div.summary { (summary.message) }
            h2 { "Results" }
            div.stats {
                table {
                    tbody {
                        tr {
                            td.key { "Score" }
                            td.val { (summary.score) " / " (summary.total) }
                        }
                        tr {
                            td.key { "Percent" }
                            td.val { (summary.percent) "%" }
                        }
                        tr {
                            td.key { "Started" }
                            td.val { (started) }
                        }
                        tr {
                            td.key { "Finished" }
                            td.val { (finished) }
                        }
                        tr {
                            td.key { "Duration (seconds)" }
                            td.val { (duration) }
                        }
                    }
                }
            }
            @if !missed.is_empty() {
                h2 { "Review" }
                ul.missed {
                    @for miss in &missed {
                        li {
                            div.prompt.rich-text { (PreEscaped(markdown_to_html_inline(&miss.question.question))) }
                            div.your-answer {
                                "Your answer: "
                                span.rich-text { (PreEscaped(markdown_to_html_inline(miss.question.options.get(miss.selected_answer).map(String::as_str).unwrap_or("-")))) }
                            }
                            div.correct-answer {
                                "Correct answer: "
                                span.rich-text { (PreEscaped(markdown_to_html_inline(miss.question.correct_option()))) }
                            }
                            div.explanation.rich-text { (PreEscaped(markdown_to_html(&miss.question.explanation))) }
                        }
                    }
                }
            }
            form action="/quiz" method="post" {
                button #again type="submit" name="action" value="Reset" { "Play Again" }
            }
        }
    }
}

fn render_lesson_list(m: &MutableState) -> Markup {
    html! {
        div.lessons {
            h1 { "Knowledge Reader" }
            @for category in Category::ALL {
                @let lessons = m.reader.lessons_in(category).collect::<Vec<_>>();
                @if !lessons.is_empty() {
                    h2 { (category.label()) }
                    div.lesson-list {
                        @for lesson in lessons {
                            form action="/learn" method="post" {
                                input type="hidden" name="action" value="Open";
                                button.lesson type="submit" name="lesson" value=(lesson.id) {
                                    span.icon { (lesson.icon) }
                                    span.title { (lesson.title) }
                                    span.count { (lesson.section_count()) " sections" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_lesson(m: &MutableState, lesson: &Lesson) -> Markup {
    let reader = &m.reader;
    let current = reader.section_index();
    let (position, count) = reader.section_progress().unwrap_or((1, lesson.section_count()));
    html! {
        div.lesson {
            div.lesson-header {
                form action="/learn" method="post" {
                    button #back type="submit" name="action" value="Back" { "← All lessons" }
                }
                h1 { span.icon { (lesson.icon) } " " (lesson.title) }
                span.counter { "Section " (position) " of " (count) }
            }
            form.section-tabs action="/learn" method="post" {
                input type="hidden" name="action" value="Goto";
                @for (i, section) in lesson.sections.iter().enumerate() {
                    button.tab.active[i == current] type="submit" name="section" value=(i) { (section.title) }
                }
            }
            @if let Some(section) = reader.current_section() {
                (render_section(section))
            }
            div.lesson-controls {
                form action="/learn" method="post" {
                    @if !reader.is_first_section() {
                        button #previous type="submit" name="action" value="Previous" title="Shortcut: left arrow." { "← Previous" }
                    } @else if let Some(previous) = reader.previous_lesson() {
                        button #previous-lesson type="submit" name="action" value="PreviousLesson" { "← " (previous.title) }
                    }
                    @if !reader.is_last_section() {
                        button #next type="submit" name="action" value="Next" title="Shortcut: right arrow." { "Next →" }
                    } @else if let Some(next) = reader.next_lesson() {
                        button #next-lesson type="submit" name="action" value="NextLesson" { "Next lesson: " (next.title) " →" }
                    } @else {
                        button #finish type="submit" name="action" value="Back" { "Finish" }
                    }
                }
            }
        }
    }
}

fn render_section(section: &LessonSection) -> Markup {
    html! {
        article.section {
            h2 { (section.title) }
            div.content.rich-text { (PreEscaped(markdown_to_html(&section.content))) }
            @if let Some(example) = &section.code_example {
                figure.code-example {
                    @if let Some(filename) = &example.filename {
                        figcaption.filename { (filename) }
                    }
                    pre {
                        code class={ "language-" (example.language) } { (example.code) }
                    }
                }
            }
            @if !section.tips.is_empty() {
                aside.tips {
                    h3 { "Tips" }
                    ul {
                        @for tip in &section.tips {
                            li.rich-text { (PreEscaped(markdown_to_html_inline(tip))) }
                        }
                    }
                }
            }
        }
    }
}
