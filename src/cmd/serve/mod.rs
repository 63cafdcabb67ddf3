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

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::time::Duration;

    use ngflash_core::error::Fallible;
    use portpicker::pick_unused_port;
    use reqwest::Client;
    use reqwest::StatusCode;
    use tokio::spawn;
    use tokio::task::JoinHandle;
    use tokio::time::timeout;

    use crate::cmd::serve::server::DEFAULT_QUESTION_COUNT;
    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::utils::wait_for_server;

    type TestResult = Result<(), Box<dyn Error>>;

    const TEST_HOST: &str = "127.0.0.1";

    async fn spawn_server() -> Result<(u16, JoinHandle<Fallible<()>>), Box<dyn Error>> {
        let port = pick_unused_port().unwrap();
        let config = ServerConfig {
            host: TEST_HOST.to_string(),
            port,
            seed: Some(42),
            default_count: DEFAULT_QUESTION_COUNT,
        };
        let handle = spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        Ok((port, handle))
    }

    async fn post_form(port: u16, path: &str, form: &[(&str, &str)]) -> Result<String, Box<dyn Error>> {
        let response = Client::new()
            .post(format!("http://{TEST_HOST}:{port}{path}"))
            .form(form)
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    #[tokio::test]
    async fn test_static_routes() -> TestResult {
        let (port, _) = spawn_server().await?;

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the `script.js` endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/script.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        // Hit the not found endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Hit the menu.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("Flashcard Game"));
        assert!(html.contains("Knowledge Reader"));
        assert!(html.contains("40 multiple-choice questions"));
        Ok(())
    }

    #[tokio::test]
    async fn test_quiz_e2e() -> TestResult {
        let (port, _) = spawn_server().await?;

        let html = reqwest::get(format!("http://{TEST_HOST}:{port}/quiz"))
            .await?
            .text()
            .await?;
        assert!(html.contains("Start Quiz"));
        assert!(!html.contains("No questions match"));

        let html = post_form(
            port,
            "/quiz",
            &[
                ("action", "Start"),
                ("category", "components"),
                ("difficulty", "all"),
                ("count", "2"),
            ],
        )
        .await?;
        assert!(html.contains("Question 1 of 2"));
        assert!(html.contains("Score: 0"));
        assert!(html.contains(r#"<span class="tag">Components</span>"#));

        let html = post_form(port, "/quiz", &[("action", "Answer"), ("answer", "0")]).await?;
        assert!(html.contains("Correct!") || html.contains("Incorrect."));
        assert!(html.contains("Next Question"));

        let html = post_form(port, "/quiz", &[("action", "Next")]).await?;
        assert!(html.contains("Question 2 of 2"));

        let html = post_form(port, "/quiz", &[("action", "Answer"), ("answer", "1")]).await?;
        assert!(html.contains("See Results"));

        let html = post_form(port, "/quiz", &[("action", "Next")]).await?;
        assert!(html.contains("Quiz Completed"));
        assert!(html.contains(" / 2"));

        let html = post_form(port, "/quiz", &[("action", "Reset")]).await?;
        assert!(html.contains("Start Quiz"));
        Ok(())
    }

    #[tokio::test]
    async fn test_quiz_without_matches() -> TestResult {
        let (port, _) = spawn_server().await?;
        let html = post_form(
            port,
            "/quiz",
            &[("action", "Start"), ("category", "all"), ("count", "0")],
        )
        .await?;
        assert!(html.contains("No questions match those filters."));
        Ok(())
    }

    #[tokio::test]
    async fn test_quiz_ignores_malformed_input() -> TestResult {
        let (port, _) = spawn_server().await?;

        // Answering without a session does nothing.
        let html = post_form(port, "/quiz", &[("action", "Answer"), ("answer", "2")]).await?;
        assert!(html.contains("Start Quiz"));

        // Unknown filters fall back to the wildcard, bad counts to the default.
        let html = post_form(
            port,
            "/quiz",
            &[
                ("action", "Start"),
                ("category", "angularjs"),
                ("difficulty", "expert"),
                ("count", "lots"),
            ],
        )
        .await?;
        assert!(html.contains(&format!("Question 1 of {DEFAULT_QUESTION_COUNT}")));

        let html = post_form(port, "/quiz", &[("action", "Answer"), ("answer", "x")]).await?;
        assert!(!html.contains("Next Question"));

        let html = post_form(port, "/quiz", &[("action", "Dance")]).await?;
        assert!(html.contains("Question 1 of"));
        Ok(())
    }

    #[tokio::test]
    async fn test_reader_e2e() -> TestResult {
        let (port, _) = spawn_server().await?;

        let html = reqwest::get(format!("http://{TEST_HOST}:{port}/learn"))
            .await?
            .text()
            .await?;
        assert!(html.contains("Knowledge Reader"));
        assert!(html.contains("Signals"));

        let html = post_form(port, "/learn", &[("action", "Open"), ("lesson", "components")]).await?;
        assert!(html.contains("What is a component?"));
        assert!(html.contains("Section 1 of 3"));
        assert!(html.contains("hello.component.ts"));
        assert!(html.contains(r#"class="language-typescript""#));

        let html = post_form(port, "/learn", &[("action", "Next")]).await?;
        assert!(html.contains("Section 2 of 3"));

        let html = post_form(port, "/learn", &[("action", "Goto"), ("section", "99")]).await?;
        assert!(html.contains("Section 3 of 3"));
        assert!(html.contains("Next lesson: Templates &amp; Control Flow"));

        let html = post_form(port, "/learn", &[("action", "Next")]).await?;
        assert!(html.contains("Section 3 of 3"));

        let html = post_form(port, "/learn", &[("action", "NextLesson")]).await?;
        assert!(html.contains("Conditionals with @if"));
        assert!(html.contains("Section 1 of 3"));

        let html = post_form(port, "/learn", &[("action", "PreviousLesson")]).await?;
        assert!(html.contains("What is a component?"));

        let html = post_form(port, "/learn", &[("action", "Back")]).await?;
        assert!(html.contains("sections"));
        assert!(!html.contains("Section 1 of"));
        Ok(())
    }

    #[tokio::test]
    async fn test_reader_unknown_lesson() -> TestResult {
        let (port, _) = spawn_server().await?;
        let html = post_form(port, "/learn", &[("action", "Open"), ("lesson", "nope")]).await?;
        assert!(!html.contains("Section 1 of"));
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown() -> TestResult {
        let (port, handle) = spawn_server().await?;
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        let response = client
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", "Shutdown")])
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        drop(response);
        drop(client);
        timeout(Duration::from_secs(5), handle).await???;
        Ok(())
    }
}
