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
use anyhow::{Context, Result};
use harbor_browser::{AssetBrowser, TreeGroup};
use std::path::Path;

pub fn run(project: &Path) -> Result<()> {
    let browser = AssetBrowser::open(project)
        .with_context(|| format!("Failed to open project at '{}'", project.display()))?;
    let tree = browser.tree();

    println!("{}{}{} {}{}", BOLD, BLUE, FOLDER, tree.root.key, RESET);
    print_group(&tree.root, "");

    for warning in &tree.warnings {
        print_warning(&warning.to_string());
    }
    println!(
        "\n{}{} folders, {} assets{}",
        DIM,
        tree.root.group_count(),
        tree.root.item_count(),
        RESET
    );
    Ok(())
}

fn print_group(group: &TreeGroup, indent: &str) {
    let count = group.items.len() + group.groups.len();
    let mut index = 0;

    for item in &group.items {
        index += 1;
        let branch = if index == count { "└─" } else { "├─" };
        println!(
            "{indent}{branch} {FILE} {} {}{}{}",
            item.key, DIM, item.uid, RESET
        );
    }

    for child in &group.groups {
        index += 1;
        let last = index == count;
        let branch = if last { "└─" } else { "├─" };
        println!("{indent}{branch} {}{}{} {}{}", BOLD, BLUE, FOLDER, child.key, RESET);

        let nested = format!("{indent}{}", if last { "   " } else { "│  " });
        print_group(child, &nested);
    }
}
