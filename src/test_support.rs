//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, Category, Example, Module};

fn module(key: &str, category: Category, examples: &[&str]) -> Module {
    Module {
        key: key.to_string(),
        title: key.to_string(),
        category,
        examples: examples
            .iter()
            .map(|name| Example {
                name: name.to_string(),
                description: Some(format!("The {name} example for {key}.")),
            })
            .collect(),
    }
}

/// A small catalog: three components followed by two APIs.
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        module("Button", Category::Components, &["basic usage", "disabled"]),
        module("Image", Category::Components, &["basic usage", "resize modes"]),
        module("Switch", Category::Components, &["basic usage"]),
        module("Alert", Category::Apis, &["simple alert", "three buttons"]),
        module("Clipboard", Category::Apis, &["copy and paste"]),
    ])
    .expect("fixture catalog is valid")
}
