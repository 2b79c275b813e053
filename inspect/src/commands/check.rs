// Copyright 2025 eraflo
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

use crate::helpers::*;
use anyhow::{bail, Context, Result};
use harbor_browser::{AssetBrowser, TypedView};
use std::path::Path;

pub fn run(project: &Path) -> Result<()> {
    print_task_start("Checking Assets", MAGNIFIER, CYAN);

    let mut browser = AssetBrowser::open(project)
        .with_context(|| format!("Failed to open project at '{}'", project.display()))?;

    let tree = browser.tree();
    for warning in &tree.warnings {
        print_warning(&warning.to_string());
    }

    let results = browser.preload_all(false);
    log::debug!("Preloaded {} assets", results.len());
    let mut failed = 0;
    for (uid, loaded) in &results {
        if !loaded {
            failed += 1;
            let reason = browser
                .view(uid)
                .map(|view| view.display_name().to_owned())
                .unwrap_or_default();
            print_error(&format!("{uid}: {reason}"));
        }
    }

    if failed > 0 {
        bail!("{failed} of {} assets failed to load", results.len());
    }
    print_success(&format!("All {} assets loaded", results.len()));
    Ok(())
}
