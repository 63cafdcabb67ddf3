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

use ngflash_core::Catalog;
use ngflash_core::error::Fallible;

/// Load and validate the built-in content, printing a one-line report.
pub fn check_content() -> Fallible<()> {
    let catalog = Catalog::builtin()?;
    println!("{}", report(&catalog));
    Ok(())
}

fn report(catalog: &Catalog) -> String {
    let sections: usize = catalog.lessons.iter().map(|l| l.section_count()).sum();
    format!(
        "ok: {} questions, {} lessons ({} sections)",
        catalog.questions.len(),
        catalog.lessons.len(),
        sections
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_builtin_content() -> Fallible<()> {
        check_content()
    }

    #[test]
    fn test_report() -> Fallible<()> {
        let catalog = Catalog::builtin()?;
        assert!(report(&catalog).starts_with("ok: 40 questions, "));
        Ok(())
    }
}
