//! Integration tests for the remap-table builder.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use guidpatch_map::{build_tables, locate};
use guidpatch_model::{AssetCatalog, NoProgress, ShaderLocation, TypeDescriptor};

#[derive(Default)]
struct StubCatalog {
    scripts: BTreeMap<String, (PathBuf, TypeDescriptor)>,
    shaders: BTreeMap<String, ShaderLocation>,
}

impl StubCatalog {
    fn with_script(mut self, guid: &str, full_name: &str, component: bool) -> Self {
        let class_name = full_name.rsplit('.').next().unwrap().to_string();
        let path = PathBuf::from(format!("Assets/Scripts/{class_name}.cs"));
        self.scripts.insert(
            guid.to_string(),
            (
                path,
                TypeDescriptor {
                    assembly: "Assembly-CSharp".to_string(),
                    full_name: full_name.to_string(),
                    class_name,
                    is_component: component,
                },
            ),
        );
        self
    }

    fn with_shader(mut self, name: &str, asset_guid: &str, object_id: u64) -> Self {
        self.shaders.insert(
            name.to_string(),
            ShaderLocation {
                asset_guid: asset_guid.to_string(),
                object_id,
            },
        );
        self
    }
}

impl AssetCatalog for StubCatalog {
    fn script_guids(&self) -> Vec<String> {
        self.scripts.keys().cloned().collect()
    }

    fn guid_to_path(&self, guid: &str) -> Option<PathBuf> {
        self.scripts.get(guid).map(|(path, _)| path.clone())
    }

    fn script_type_at(&self, path: &Path) -> Option<TypeDescriptor> {
        self.scripts
            .values()
            .find(|(candidate, _)| candidate == path)
            .map(|(_, descriptor)| descriptor.clone())
    }

    fn resolve_shader(&self, name: &str) -> Option<ShaderLocation> {
        self.shaders.get(name).cloned()
    }
}

fn write_file(path: &Path, text: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
}

fn exported_root(dir: &TempDir) -> PathBuf {
    let root = dir.path().to_path_buf();
    std::fs::create_dir_all(root.join("Assets")).unwrap();
    root
}

#[test]
fn records_script_mapping_when_identifiers_differ() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(
        &root.join("Assets/Scripts/Assembly-CSharp/Game/Player.cs.meta"),
        "fileFormatVersion: 2\nguid: aaa111\n",
    );
    write_file(&root.join("Assets/Scripts/Assembly-CSharp/Game/Player.cs"), "// source\n");

    let catalog = StubCatalog::default().with_script("bbb222", "Game.Player", true);
    let layout = locate(&root).unwrap();
    let tables = build_tables(&layout, &catalog, &NoProgress);

    let entry = tables.scripts.get("aaa111").expect("mapping recorded");
    assert_eq!(entry.new_guid, "bbb222");
    assert_eq!(entry.class_name, "Player");
    assert!(entry.file_path.ends_with("Assets/Scripts/Assembly-CSharp/Game/Player.cs"));
    assert!(tables.shaders.is_empty());
}

#[test]
fn self_mapping_is_excluded() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(
        &root.join("Assets/Scripts/Assembly-CSharp/Game/Player.cs.meta"),
        "guid: bbb222\n",
    );

    let catalog = StubCatalog::default().with_script("bbb222", "Game.Player", true);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);
    assert!(tables.scripts.is_empty());
}

#[test]
fn non_component_types_are_skipped() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(
        &root.join("Assets/Scripts/Assembly-CSharp/Util/Registry.cs.meta"),
        "guid: aaa111\n",
    );

    let catalog = StubCatalog::default().with_script("bbb222", "Util.Registry", false);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);
    assert!(tables.scripts.is_empty());
}

#[test]
fn missing_companion_metadata_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    std::fs::create_dir_all(root.join("Assets/Scripts")).unwrap();

    let catalog = StubCatalog::default().with_script("bbb222", "Game.Player", true);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);
    assert!(tables.scripts.is_empty());
}

#[test]
fn metadata_without_identifier_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(
        &root.join("Assets/Scripts/Assembly-CSharp/Game/Player.cs.meta"),
        "fileFormatVersion: 2\n",
    );

    let catalog = StubCatalog::default().with_script("bbb222", "Game.Player", true);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);
    assert!(tables.scripts.is_empty());
}

#[test]
fn duplicate_embedded_identifier_keeps_last() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(
        &root.join("Assets/Scripts/Assembly-CSharp/Alpha.cs.meta"),
        "guid: old000\n",
    );
    write_file(
        &root.join("Assets/Scripts/Assembly-CSharp/Beta.cs.meta"),
        "guid: old000\n",
    );

    let catalog = StubCatalog::default()
        .with_script("guid1", "Alpha", true)
        .with_script("guid2", "Beta", true);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);

    assert_eq!(tables.scripts.len(), 1);
    // Catalog enumeration is sorted, so guid2 (Beta) is indexed last.
    assert_eq!(tables.scripts.get("old000").unwrap().new_guid, "guid2");
}

#[test]
fn records_shader_mapping_with_canonical_pair() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(
        &root.join("Assets/Shader/Foo.shader"),
        "Shader \"Custom/Foo\"\n{\n  SubShader {}\n}\n",
    );
    write_file(&root.join("Assets/Shader/Foo.shader.meta"), "guid: ccc333\n");

    let catalog = StubCatalog::default().with_shader("Custom/Foo", "ddd444", 999);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);

    let entry = tables.shaders.get("ccc333").expect("mapping recorded");
    assert_eq!(entry.asset_guid, "ddd444");
    assert_eq!(entry.object_id, 999);
    assert_eq!(entry.shader_name, "Custom/Foo");
}

#[test]
fn unresolved_shader_name_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(
        &root.join("Assets/Shader/Gone.shader"),
        "Shader \"Custom/Gone\"\n{\n}\n",
    );
    write_file(&root.join("Assets/Shader/Gone.shader.meta"), "guid: ccc333\n");

    let catalog = StubCatalog::default();
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);
    assert!(tables.shaders.is_empty());
}

#[test]
fn non_shader_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(&root.join("Assets/Shader/notes.txt"), "Shader \"Custom/Foo\" {\n");
    write_file(&root.join("Assets/Shader/notes.txt.meta"), "guid: ccc333\n");

    let catalog = StubCatalog::default().with_shader("Custom/Foo", "ddd444", 999);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);
    assert!(tables.shaders.is_empty());
}

#[test]
fn shader_without_companion_metadata_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);
    write_file(
        &root.join("Assets/Shader/Foo.shader"),
        "Shader \"Custom/Foo\"\n{\n}\n",
    );

    let catalog = StubCatalog::default().with_shader("Custom/Foo", "ddd444", 999);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);
    assert!(tables.shaders.is_empty());
}

#[test]
fn passes_are_skipped_when_folders_absent() {
    let dir = TempDir::new().unwrap();
    let root = exported_root(&dir);

    let catalog = StubCatalog::default()
        .with_script("bbb222", "Game.Player", true)
        .with_shader("Custom/Foo", "ddd444", 999);
    let tables = build_tables(&locate(&root).unwrap(), &catalog, &NoProgress);
    assert!(tables.is_empty());
}
