//! Renders the ordered model into a PHP constants class.

use crate::idents::camel_to_constant;
use crate::model::{FieldRecord, SchemaModel};

/// Column at which doc-block text is word-wrapped.
pub const DOC_WRAP_COLUMN: usize = 90;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prepended to each field key to form the constant value.
    pub prefix: String,
    pub namespace: String,
    pub class_name: String,
    /// Pre-formatted timestamp for the header; the header line is omitted
    /// entirely when `None`, which keeps renders byte-comparable in tests.
    pub generated_at: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            prefix: String::new(),
            namespace: "App\\Config".to_string(),
            class_name: "PluginConstants".to_string(),
            generated_at: None,
        }
    }
}

/// Compiles the model into the full text of the generated file. Output is a
/// pure function of the inputs: equal (model, options) yield equal bytes.
pub fn render_constants(model: &SchemaModel, opts: &RenderOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("<?php".to_string());
    lines.push(String::new());
    lines.push(format!("namespace {};", opts.namespace));
    lines.push(String::new());
    lines.push("/**".to_string());
    lines.push(" * Contains constants for the plugin configuration keys.".to_string());
    lines.push(" *".to_string());
    lines.push(" * ! THIS FILE IS AUTO-GENERATED !".to_string());
    lines.push(" * ! Do not edit this file directly !".to_string());
    lines.push(" *".to_string());
    lines.push(" * Generated by: confgen".to_string());
    if let Some(ts) = &opts.generated_at {
        lines.push(format!(" * Generated at: {}", ts));
    }
    lines.push(" */".to_string());
    lines.push(format!("final class {}", opts.class_name));
    lines.push("{".to_string());

    for (i, field) in model.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        push_doc_block(&mut lines, field);
        lines.push(format!(
            "    public const {} = '{}{}';",
            camel_to_constant(&field.key),
            opts.prefix,
            field.key
        ));
    }

    lines.push("}".to_string());
    lines.push(String::new()); // Final newline

    lines.join("\n")
}

fn push_doc_block(lines: &mut Vec<String>, field: &FieldRecord) {
    lines.push("    /**".to_string());
    for text in wrap_text(&field.label, DOC_WRAP_COLUMN) {
        lines.push(format!("     * {}", text));
    }
    if !field.help_text.is_empty() {
        lines.push("     *".to_string());
        for text in wrap_text(&field.help_text, DOC_WRAP_COLUMN) {
            lines.push(format!("     * {}", text));
        }
    }
    if let Some(default) = &field.default_value {
        lines.push("     *".to_string());
        lines.push(format!("     * @default {}", scalar_literal(default)));
    }
    if !field.options.is_empty() {
        lines.push("     *".to_string());
        for option in &field.options {
            lines.push(format!(
                "     * @option {}: {}",
                scalar_literal(&option.id),
                option.name
            ));
        }
    }
    lines.push("     */".to_string());
}

/// Numeric values render bare, everything else as a single-quoted PHP string.
fn scalar_literal(value: &str) -> String {
    if is_numeric(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

/// Optional sign, digits, at most one decimal point.
fn is_numeric(value: &str) -> bool {
    let body = value.strip_prefix('-').unwrap_or(value);
    !body.is_empty()
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.chars().filter(|&c| c == '.').count() <= 1
        && body.chars().any(|c| c.is_ascii_digit())
}

/// Greedy word wrap. Words longer than the width get a line of their own
/// rather than being split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            wrapped.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || wrapped.is_empty() {
        wrapped.push(line);
    }
    wrapped
}
