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
use harbor_browser::{AssetBrowser, AssetView, TypedView};
use harbor_core::{AssetCatalog, AssetUid};
use std::path::Path;

pub fn run(project: &Path, asset: &str) -> Result<()> {
    let mut browser = AssetBrowser::open(project)
        .with_context(|| format!("Failed to open project at '{}'", project.display()))?;

    let uid = resolve(&browser, asset)?;
    let view = browser
        .view_mut(&uid)
        .with_context(|| format!("No view for '{uid}'"))?;

    print_task_start(&format!("{:?} {}", view.kind(), uid), MAGNIFIER, CYAN);
    if view.preload_resources(false) {
        print_success("Loaded");
    } else {
        print_error("Failed to load");
    }

    print_field("display name", view.display_name());
    print_field("sidecar", view.state().entry().meta_path.display());
    print_fields(view);
    Ok(())
}

/// Accepts either a UID or a file name.
fn resolve(browser: &AssetBrowser, asset: &str) -> Result<AssetUid> {
    let uid = AssetUid::from(asset);
    if browser.catalog().file(&uid).is_some() {
        return Ok(uid);
    }

    let mut matches = browser
        .catalog()
        .files()
        .iter()
        .filter(|entry| entry.display_name == asset);
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.uid.clone()),
        (Some(_), Some(_)) => bail!("'{asset}' matches several files, use its UID"),
        (None, _) => bail!("No asset named '{asset}'"),
    }
}

fn print_fields(view: &AssetView) {
    match view {
        AssetView::Model(model) => {
            print_field("generate materials", model.should_generate_materials());
            print_field("batch by material", model.should_batch_by_material());
            for uid in model.default_materials() {
                print_field("default material", uid);
            }
        }
        AssetView::Texture(texture) => {
            if let Some(preview) = texture.preview() {
                print_field("size", format!("{}x{}", preview.width, preview.height));
            }
            print_field("generate mips", texture.should_generate_mips());
            print_field("storage binding", texture.should_support_storage_binding());
            print_field("clamping", texture.clamping());
            print_field("filtration", texture.filtration());
            print_field("format", texture.format());
        }
        AssetView::ShaderLibrary(library) => {
            print_field("lines", library.code().lines().count());
        }
        AssetView::Shader(shader) => {
            for include in shader.includes().lines() {
                print_field("include", include);
            }
            for define in shader.defines().lines() {
                print_field("define", define);
            }
            let stages = [
                ("common", shader.glsl_common()),
                ("vertex", shader.glsl_vertex()),
                ("fragment", shader.glsl_fragment()),
                ("compute", shader.glsl_compute()),
            ];
            for (stage, source) in stages {
                if let Some(source) = source {
                    print_field(stage, format!("{} lines", source.lines().count()));
                }
            }
        }
        AssetView::Generic(_) => {}
    }
}
