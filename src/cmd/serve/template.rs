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

use maud::DOCTYPE;
use maud::Markup;
use maud::html;

const HIGHLIGHT_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";
const HIGHLIGHT_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css";

/// The top-level screen a page belongs to, used to highlight the nav bar.
#[derive(Clone, Copy, PartialEq)]
pub enum Mode {
    Menu,
    Quiz,
    Learn,
}

pub fn page_template(mode: Mode, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "ngflash" }
                link rel="stylesheet" href=(HIGHLIGHT_CSS_URL);
                script defer src=(HIGHLIGHT_JS_URL) {};
                link rel="stylesheet" href="/style.css";
            }
            body {
                nav.topbar {
                    a.brand href="/" { "ngflash" }
                    (nav_link("/quiz", "Flashcard Game", mode == Mode::Quiz))
                    (nav_link("/learn", "Knowledge Reader", mode == Mode::Learn))
                }
                main {
                    (body)
                }
                script src="/script.js" {};
            }
        }
    }
}

fn nav_link(href: &str, label: &str, active: bool) -> Markup {
    if active {
        html! { a.active href=(href) { (label) } }
    } else {
        html! { a href=(href) { (label) } }
    }
}
