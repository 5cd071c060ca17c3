//! # Resolve Example
//!
//! Resolves the Button descriptor against a few content objects and shows
//! how visibility reacts to the loading and icon flags.
//!
//! Run with: `cargo run --example resolve_button`

use blueprint::serde_json::json;
use blueprint::{resolve, widgets, Content};

fn show(title: &str, content: &Content) {
    let registry = widgets::catalog().expect("built-in catalog is valid");
    let button = registry.get("Button").expect("Button is built in");
    let view = resolve(button, content);

    println!("{title}");
    for (key, entry) in view.iter() {
        let marker = if entry.visible { "shown " } else { "hidden" };
        println!("  [{marker}] {:<12} = {}", key, entry.value);
    }
    println!();
}

fn main() {
    show("empty content (all defaults):", &Content::new());

    let mut loading = Content::new();
    loading.insert("loading".into(), json!(true));
    loading.insert("showIcon".into(), json!(true));
    show("loading (icon controls give way):", &loading);

    let mut icon = Content::new();
    icon.insert("showIcon".into(), json!(true));
    icon.insert("iconName".into(), json!("star"));
    show("icon picked, not loading:", &icon);
}
