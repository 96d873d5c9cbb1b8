//! The scheme, theme and template shipped in the repository stay consistent.

use std::path::PathBuf;

use palettize_core::{
    analyze, build_theme, load_palette, load_template, load_theme, Slot, Templatizer,
};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn test_bundled_template_builds_for_bundled_palette() {
    let root = repo_root();
    let palette = load_palette(root.join("data/rose-pine-moon.yml")).unwrap();
    let text = load_template(root.join("templates/vscode-theme.json.j2")).unwrap();

    let theme = build_theme(&text, &palette).unwrap();
    assert_eq!(theme["name"], "Rosé Pine Moon");
    assert_eq!(theme["type"], "dark");
    assert_eq!(theme["colors"]["list.activeSelectionBackground"], "#ea9a97e6");
    assert_eq!(theme["colors"]["focusBorder"], "#00000000");
    assert_eq!(theme["tokenColors"][6]["settings"]["background"], "#eb6f9226");
}

#[test]
fn test_bundled_theme_templatizes() {
    let root = repo_root();
    let palette = load_palette(root.join("data/rose-pine-moon.yml")).unwrap();
    let theme = load_theme(root.join("data/rose-pine-moon.json")).unwrap();

    let exact = Templatizer::new(&palette).generate(&theme);
    assert_eq!(
        exact.document["colors"]["list.activeSelectionBackground"],
        "{{ base0A }}e6"
    );
    assert_eq!(exact.document["colors"]["focusBorder"], "#00000000");
    assert!(exact.document.get("semanticHighlighting").is_none());

    // "#2a283e" is one step away from base01.
    let fuzzy = Templatizer::new(&palette).threshold(Some(2.0)).generate(&theme);
    assert_eq!(fuzzy.document["colors"]["panel.background"], "{{ base01 }}");
    assert!(fuzzy.report.substituted() > exact.report.substituted());

    let analysis = analyze(&theme, &palette);
    assert!(analysis.slots.iter().any(|s| s.slot == Slot::Base0A));
    assert!(analysis.unmapped.iter().any(|u| u.color == "#2a283e"));
}
