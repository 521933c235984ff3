use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
struct PointDef {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct SizeDef {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct WindowDef {
    id: String,
    title: String,
    initial_position: PointDef,
    initial_size: SizeDef,
    min_size: SizeDef,
}

#[derive(Debug, Clone, Deserialize)]
struct DockDef {
    id: String,
    label: String,
    #[serde(default)]
    href: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    windows: Vec<WindowDef>,
    dock: Vec<DockDef>,
}

fn validate(manifest: &CatalogManifest) -> Result<(), String> {
    if manifest.schema_version != 1 {
        return Err(format!(
            "catalog schema mismatch: expected 1 found {}",
            manifest.schema_version
        ));
    }

    let mut window_ids = BTreeSet::new();
    for window in &manifest.windows {
        if window.id.is_empty() || window.id.contains('.') {
            return Err(format!("invalid window id `{}`", window.id));
        }
        if !window_ids.insert(window.id.as_str()) {
            return Err(format!("duplicate window id `{}`", window.id));
        }
        if window.min_size.width <= 0 || window.min_size.height <= 0 {
            return Err(format!("window `{}` has a non-positive min size", window.id));
        }
        if window.initial_size.width < window.min_size.width
            || window.initial_size.height < window.min_size.height
        {
            return Err(format!(
                "window `{}` starts smaller than its min size",
                window.id
            ));
        }
    }

    let mut dock_ids = BTreeSet::new();
    for item in &manifest.dock {
        if !dock_ids.insert(item.id.as_str()) {
            return Err(format!("duplicate dock item `{}`", item.id));
        }
        if item.href.is_none() && !window_ids.contains(item.id.as_str()) {
            return Err(format!(
                "dock item `{}` is neither external nor a catalog window",
                item.id
            ));
        }
    }

    Ok(())
}

fn render(manifest: &CatalogManifest) -> String {
    let mut out = String::from("/// Build-time generated window catalog.\n");
    out.push_str("pub(crate) const WINDOW_CATALOG: &[WindowConfig] = &[\n");
    for w in &manifest.windows {
        let _ = writeln!(
            out,
            "    WindowConfig {{ id: {:?}, title: {:?}, initial_position: Point {{ x: {}, y: {} }}, initial_size: Size {{ width: {}, height: {} }}, min_size: Size {{ width: {}, height: {} }} }},",
            w.id,
            w.title,
            w.initial_position.x,
            w.initial_position.y,
            w.initial_size.width,
            w.initial_size.height,
            w.min_size.width,
            w.min_size.height,
        );
    }
    out.push_str("];\n\n");

    out.push_str("/// Build-time generated dock catalog.\n");
    out.push_str("pub(crate) const DOCK_CATALOG: &[DockItem] = &[\n");
    for item in &manifest.dock {
        let _ = writeln!(
            out,
            "    DockItem {{ id: {:?}, label: {:?}, href: {:?} }},",
            item.id, item.label, item.href,
        );
    }
    out.push_str("];\n");
    out
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("window_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: CatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&manifest) {
        panic!("invalid window catalog {}: {err}", path.display());
    }

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, render(&manifest))
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
