#![cfg(test)]

use confgen_compiler::{
    gen_php::{render_constants, RenderOptions},
    model::SchemaModel,
    parser::parse_schema,
};

fn render(xml: &str, opts: &RenderOptions) -> String {
    let raw = parse_schema(xml).expect("parse_schema failed");
    let model = SchemaModel::from_raw(raw);
    render_constants(&model, opts)
}

#[test]
fn two_field_schema_end_to_end() {
    let xml = r#"
    <config>
        <card>
            <title>Basic settings</title>
            <input-field>
                <name>apiKey</name>
                <label>API Key</label>
            </input-field>
            <input-field type="int">
                <name>retryCount</name>
                <label>Retries</label>
                <defaultValue>3</defaultValue>
            </input-field>
        </card>
    </config>"#;

    let opts = RenderOptions {
        prefix: "MyPlugin.config.".to_string(),
        namespace: "MyPlugin\\Config".to_string(),
        class_name: "MyPluginConstants".to_string(),
        generated_at: None,
    };
    let rendered = render(xml, &opts);

    assert!(rendered.starts_with("<?php\n\nnamespace MyPlugin\\Config;\n"));
    assert!(rendered.contains("final class MyPluginConstants"));
    assert!(rendered.contains("    public const API_KEY = 'MyPlugin.config.apiKey';"));
    assert!(rendered.contains("    public const RETRY_COUNT = 'MyPlugin.config.retryCount';"));
    assert!(rendered.contains("     * @default 3"));
    assert!(!rendered.contains("@default '3'"));

    // apiKey sorts before retryCount, regardless of declaration order.
    let api = rendered.find("API_KEY").unwrap();
    let retry = rendered.find("RETRY_COUNT").unwrap();
    assert!(api < retry);
}

#[test]
fn reverse_declared_fields_render_in_ascending_key_order() {
    let xml = r#"
    <config>
        <input-field><name>zulu</name></input-field>
        <input-field><name>mike</name></input-field>
        <input-field><name>alpha</name></input-field>
    </config>"#;

    let rendered = render(xml, &RenderOptions::default());
    let alpha = rendered.find("public const ALPHA").unwrap();
    let mike = rendered.find("public const MIKE").unwrap();
    let zulu = rendered.find("public const ZULU").unwrap();
    assert!(alpha < mike && mike < zulu);
}

#[test]
fn duplicate_keys_keep_the_last_declaration() {
    let xml = r#"
    <config>
        <input-field><name>apiKey</name><label>First</label></input-field>
        <input-field><name>apiKey</name><label>Second</label></input-field>
    </config>"#;

    let rendered = render(xml, &RenderOptions::default());
    assert_eq!(rendered.matches("public const API_KEY").count(), 1);
    assert!(rendered.contains("     * Second"));
    assert!(!rendered.contains("     * First"));
}

#[test]
fn empty_schema_renders_a_header_only_artifact() {
    let xml = "<config><card><title>Nothing here</title></card></config>";
    let raw = parse_schema(xml).unwrap();
    let model = SchemaModel::from_raw(raw);
    assert!(model.is_empty());

    let rendered = render_constants(&model, &RenderOptions::default());
    assert!(rendered.contains("! THIS FILE IS AUTO-GENERATED !"));
    assert!(!rendered.contains("public const"));
    assert!(rendered.trim_end().ends_with('}'));
}

#[test]
fn nameless_field_does_not_disturb_the_others() {
    let xml = r#"
    <config>
        <input-field><name>bravo</name></input-field>
        <input-field><label>No name here</label></input-field>
        <input-field><name>delta</name></input-field>
    </config>"#;

    let raw = parse_schema(xml).unwrap();
    let model = SchemaModel::from_raw(raw);
    assert_eq!(model.len(), 2);

    let rendered = render_constants(&model, &RenderOptions::default());
    assert!(rendered.contains("public const BRAVO = 'bravo';"));
    assert!(rendered.contains("public const DELTA = 'delta';"));
    assert!(!rendered.contains("No name here"));
}

#[test]
fn localized_texts_fall_back_per_attribute() {
    let xml = r#"
    <config>
        <input-field>
            <name>shippingMode</name>
            <label lang="de-DE">Versandart</label>
            <label>Shipping mode</label>
            <helpText lang="de-DE">Nur getaggte Hilfe</helpText>
            <options>
                <option>
                    <id>express</id>
                    <name lang="de-DE">Express (DE)</name>
                    <name>Express</name>
                </option>
            </options>
        </input-field>
    </config>"#;

    let rendered = render(xml, &RenderOptions::default());
    assert!(rendered.contains("     * Shipping mode"));
    assert!(rendered.contains("     * Nur getaggte Hilfe"));
    assert!(rendered.contains("     * @option 'express': Express\n"));
}

#[test]
fn rendering_twice_yields_identical_bytes() {
    let xml = r#"
    <config>
        <input-field><name>betaFlag</name><defaultValue>off</defaultValue></input-field>
        <input-field><name>alphaFlag</name></input-field>
    </config>"#;

    let opts = RenderOptions::default();
    assert_eq!(render(xml, &opts), render(xml, &opts));
}
