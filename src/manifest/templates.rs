//! Template Generation for Dataset Manifests
//!
//! Generates starter manifests for the `init` command.

use super::{DatasetManifest, SequenceFormat, SplitShare, TrackingSpec, TransformField};

/// Template type for initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Minimal manifest with required fields only
    Minimal,
    /// Full manifest with withholding and tracking examples
    Full,
}

/// Generate a dataset manifest from a template
pub fn generate_manifest(template: Template, name: &str, input: Option<&str>) -> DatasetManifest {
    match template {
        Template::Minimal => generate_minimal(name, input),
        Template::Full => generate_full(name, input),
    }
}

/// Generate YAML text from a template
pub fn generate_yaml(template: Template, name: &str, input: Option<&str>) -> String {
    let manifest = generate_manifest(template, name, input);
    serde_yaml::to_string(&manifest).unwrap_or_else(|_err| "# error generating YAML".to_string())
}

fn input_path(name: &str, input: Option<&str>) -> String {
    input.map(str::to_string).unwrap_or_else(|| format!("data/{name}.tsv"))
}

fn standard_shares() -> Vec<SplitShare> {
    vec![
        SplitShare { name: "train".to_string(), percent: 80 },
        SplitShare { name: "test".to_string(), percent: 10 },
        SplitShare { name: "val".to_string(), percent: 10 },
    ]
}

fn generate_minimal(name: &str, input: Option<&str>) -> DatasetManifest {
    DatasetManifest {
        name: name.to_string(),
        input: input_path(name, input).into(),
        source_format: SequenceFormat::Sequence,
        target_format: SequenceFormat::Sequence,
        overwrite: false,
        transform_field: TransformField::Source,
        offset: None,
        seed: Some(42),
        splits: standard_shares(),
        withholding: Vec::new(),
        tracking: Vec::new(),
    }
}

fn generate_full(name: &str, input: Option<&str>) -> DatasetManifest {
    DatasetManifest {
        withholding: vec!["^b x".to_string()],
        tracking: vec![
            TrackingSpec {
                name: "withheld_bx".to_string(),
                pattern: "^b x".to_string(),
            },
            TrackingSpec {
                name: "reflexives".to_string(),
                pattern: "self$".to_string(),
            },
        ],
        offset: Some(0),
        ..generate_minimal(name, input)
    }
}
