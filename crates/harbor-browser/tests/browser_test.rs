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

use anyhow::Result;
use harbor_browser::{AssetBrowser, TreeNode, TypedView};
use harbor_core::asset::{TextureClamping, TextureFiltration};
use harbor_core::AssetUid;
use harbor_io::{load_manifest, load_record, scan_project};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Lays out a project with one asset of each kind.
fn sample_project(root: &Path) -> Result<()> {
    let content = root.join("Content");
    write(&content.join("Models/cube.fbx"), "fbx")?;
    write(
        &content.join("Models/cube.fbx.asset"),
        "fileId: '{CUBE}'\nbShouldGenerateMaterials: false\nbShouldBatchByMaterial: false\n",
    )?;

    let png = content.join("Textures/wall.png");
    fs::create_dir_all(png.parent().unwrap())?;
    image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255])).save(&png)?;
    write(
        &content.join("Textures/wall.png.asset"),
        "fileId: '{WALL}'\nclamping: Repeat\nfiltration: Linear\nformat: R8G8B8A8_SRGB\n",
    )?;

    write(&content.join("Shaders/noise.glsl"), "float noise();\n")?;
    write(&content.join("Shaders/noise.glsl.asset"), "fileId: '{NOISE}'\n")?;
    write(
        &content.join("Shaders/lit.shader"),
        "includes: Shaders/noise.glsl\nincludes: Shaders/light.glsl\nglslCommon: '#version 450'\n",
    )?;
    write(&content.join("Shaders/lit.shader.asset"), "fileId: '{LIT}'\n")?;
    Ok(())
}

#[test]
fn open_builds_a_complete_tree() -> Result<()> {
    let dir = tempdir()?;
    sample_project(dir.path())?;

    let browser = AssetBrowser::open(dir.path())?;
    let tree = browser.tree();

    assert!(tree.is_complete());
    assert_eq!(tree.root.group_count(), browser.catalog().folders.len());
    assert_eq!(tree.root.item_count(), browser.catalog().files.len());

    for entry in &browser.catalog().files {
        assert!(matches!(tree.find_file(&entry.uid), Some(TreeNode::Item(_))));
    }
    assert!(tree.find_file(&AssetUid::from("{ABSENT}")).is_none());
    Ok(())
}

#[test]
fn preload_all_populates_every_view() -> Result<()> {
    let dir = tempdir()?;
    sample_project(dir.path())?;
    let mut browser = AssetBrowser::open(dir.path())?;

    let results = browser.preload_all(false);
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|(_, ok)| *ok), "{results:?}");

    let wall = browser.view(&"{WALL}".into()).and_then(|v| v.as_texture()).unwrap();
    assert_eq!(wall.clamping(), TextureClamping::Repeat);
    assert_eq!(wall.preview().map(|p| p.width), Some(4));

    let lit = browser.view(&"{LIT}".into()).and_then(|v| v.as_shader()).unwrap();
    assert_eq!(lit.includes(), "Shaders/noise.glsl\nShaders/light.glsl\n");
    assert_eq!(lit.glsl_common(), Some("#version 450"));

    let noise = browser
        .view(&"{NOISE}".into())
        .and_then(|v| v.as_shader_library())
        .unwrap();
    assert_eq!(noise.code(), "float noise();\n");
    Ok(())
}

#[test]
fn edits_are_tracked_saved_and_reloaded() -> Result<()> {
    let dir = tempdir()?;
    sample_project(dir.path())?;
    let mut browser = AssetBrowser::open(dir.path())?;
    browser.preload_all(false);
    browser.changes().drain();

    let wall = browser
        .view_mut(&"{WALL}".into())
        .and_then(|v| v.as_texture_mut())
        .unwrap();
    assert!(wall.set_filtration(TextureFiltration::Nearest));
    assert!(!wall.set_filtration(TextureFiltration::Nearest));

    let fields: Vec<&str> = browser.subscribe().try_iter().map(|c| c.field).collect();
    assert_eq!(fields, ["dirty", "filtration"]);
    assert_eq!(browser.changes().pending(), 0);
    assert_eq!(browser.dirty_views(), vec![&AssetUid::from("{WALL}")]);

    assert_eq!(browser.save_all()?, 1);
    assert!(browser.dirty_views().is_empty());

    let mut reopened = AssetBrowser::open(dir.path())?;
    reopened.preload_all(false);
    let wall = reopened.view(&"{WALL}".into()).and_then(|v| v.as_texture()).unwrap();
    assert_eq!(wall.filtration(), TextureFiltration::Nearest);
    assert_eq!(wall.clamping(), TextureClamping::Repeat);
    Ok(())
}

#[test]
fn model_flags_and_materials_round_trip() -> Result<()> {
    let dir = tempdir()?;
    sample_project(dir.path())?;
    let cube: AssetUid = "{CUBE}".into();

    let mut browser = AssetBrowser::open(dir.path())?;
    let view = browser.view_mut(&cube).unwrap();
    assert!(view.preload_resources(false));
    view.write_back()?;
    assert!(view.preload_resources(true));
    let model = view.as_model().unwrap();
    assert!(!model.should_generate_materials());
    assert!(!model.should_batch_by_material());
    assert!(model.default_materials().is_empty());

    let model = browser.view_mut(&cube).and_then(|v| v.as_model_mut()).unwrap();
    model.set_should_generate_materials(true);
    model.set_default_materials(vec!["{M1}".into(), "{M2}".into()]);
    model.write_back()?;

    let mut reopened = AssetBrowser::open(dir.path())?;
    let view = reopened.view_mut(&cube).unwrap();
    assert!(view.preload_resources(false));
    let model = view.as_model().unwrap();
    assert!(model.should_generate_materials());
    assert_eq!(
        model.default_materials(),
        &[AssetUid::from("{M1}"), AssetUid::from("{M2}")]
    );

    let sidecar = harbor_io::load_record(&view.state().entry().meta_path)?;
    assert_eq!(sidecar.get_text("fileId").as_deref(), Some("{CUBE}"));
    Ok(())
}

#[test]
fn second_preload_without_force_is_a_no_op() -> Result<()> {
    let dir = tempdir()?;
    sample_project(dir.path())?;
    let mut browser = AssetBrowser::open(dir.path())?;
    let wall: AssetUid = "{WALL}".into();

    assert!(browser.view_mut(&wall).unwrap().preload_resources(false));

    // Breaking the sidecar is only noticed by a forced reload.
    let meta_path = browser.view(&wall).unwrap().state().entry().meta_path.clone();
    fs::write(&meta_path, "clamping: Sideways\n")?;

    let view = browser.view_mut(&wall).unwrap();
    assert!(view.preload_resources(false));
    assert_eq!(view.as_texture().unwrap().clamping(), TextureClamping::Repeat);

    assert!(!view.preload_resources(true));
    assert!(!view.is_loaded());
    assert!(view.display_name().contains("Sideways"));
    Ok(())
}

#[test]
fn failed_write_back_reaches_the_caller() -> Result<()> {
    let dir = tempdir()?;
    sample_project(dir.path())?;
    let mut browser = AssetBrowser::open(dir.path())?;
    let cube: AssetUid = "{CUBE}".into();

    let view = browser.view_mut(&cube).unwrap();
    assert!(view.preload_resources(false));
    view.as_model_mut().unwrap().set_should_batch_by_material(true);

    fs::remove_dir_all(dir.path().join("Content/Models"))?;
    assert!(browser.save_all().is_err());
    Ok(())
}

#[test]
fn editing_before_preload_keeps_the_rest_of_the_sidecar() -> Result<()> {
    let dir = tempdir()?;
    sample_project(dir.path())?;
    let cube_meta = dir.path().join("Content/Models/cube.fbx.asset");
    write(
        &cube_meta,
        "fileId: '{CUBE}'\nbShouldGenerateMaterials: true\nimportScale: 2\n",
    )?;
    let cube: AssetUid = "{CUBE}".into();

    let mut browser = AssetBrowser::open(dir.path())?;
    assert_eq!(
        browser.view(&cube).unwrap().state().record().get_text("importScale").as_deref(),
        Some("2")
    );

    let model = browser.view_mut(&cube).and_then(|v| v.as_model_mut()).unwrap();
    assert!(model.set_should_batch_by_material(true));
    assert!(model.should_generate_materials());
    assert_eq!(browser.save_all()?, 1);

    let sidecar = load_record(&cube_meta)?;
    assert_eq!(sidecar.get_text("fileId").as_deref(), Some("{CUBE}"));
    assert_eq!(sidecar.get_text("importScale").as_deref(), Some("2"));
    assert_eq!(sidecar.get_text("bShouldGenerateMaterials").as_deref(), Some("true"));
    assert_eq!(sidecar.get_text("bShouldBatchByMaterial").as_deref(), Some("true"));

    let reopened = AssetBrowser::open(dir.path())?;
    assert_eq!(reopened.catalog().files.len(), 4);
    assert!(reopened.view(&cube).is_some());
    Ok(())
}

#[test]
fn repeated_uid_gets_a_single_view() -> Result<()> {
    let dir = tempdir()?;
    sample_project(dir.path())?;
    let manifest = load_manifest(dir.path())?;
    let mut catalog = scan_project(dir.path(), &manifest)?;
    let mut copy = catalog.files[0].clone();
    copy.id = 99;
    let repeated = copy.uid.clone();
    catalog.files.push(copy);

    let mut browser = AssetBrowser::with_catalog(dir.path(), manifest, catalog);
    assert_eq!(browser.views().count(), 4);
    assert_eq!(browser.preload_all(false).len(), 4);

    browser.view_mut(&repeated).unwrap().state_mut().set_display_name("Renamed");
    assert_eq!(browser.dirty_views(), vec![&repeated]);
    assert_eq!(browser.save_all()?, 1);
    Ok(())
}

