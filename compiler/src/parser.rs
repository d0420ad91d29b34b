//! Lenient XML walk extracting one raw record per `<input-field>` element.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::GenError;

const FIELD_TAG: &str = "input-field";

/// One enumerated choice as declared in the document, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOption {
    pub id: String,
    pub name: String,
}

/// One `<input-field>` as declared in the document, before normalization.
///
/// Localization fallback has already been applied: each textual attribute
/// holds the single representative variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub key: String,
    pub label: Option<String>,
    pub help_text: Option<String>,
    pub default_value: Option<String>,
    pub options: Vec<RawOption>,
}

/// Minimal element tree, just enough structure to query field records.
/// `lang` is the only attribute the schema format makes meaningful.
#[derive(Debug, Default)]
struct Element {
    name: String,
    lang: Option<String>,
    text: String,
    children: Vec<Element>,
}

/// Extracts raw field records from the schema document, in document order.
///
/// Structurally sloppy markup is tolerated: stray close tags are ignored and
/// elements left open at EOF are kept with the children seen so far. Only a
/// document the reader cannot make sense of at all (bad attribute syntax,
/// invalid entities) is a fatal error.
pub fn parse_schema(xml: &str) -> Result<Vec<RawField>, GenError> {
    let root = read_tree(xml)?;
    let mut fields = Vec::new();
    collect_fields(&root, &mut fields);
    Ok(fields)
}

fn read_tree(xml: &str) -> Result<Element, GenError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    reader.check_end_names(false);

    let mut buf = Vec::new();
    let mut stack = vec![Element::default()];

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => stack.push(element_from(&e)?),
            Ok(Event::Empty(e)) => {
                let element = element_from(&e)?;
                push_child(&mut stack, element);
            }
            Ok(Event::End(_)) => {
                // A close tag without a matching open is dropped on the floor.
                if stack.len() > 1 {
                    let element = stack.pop().unwrap();
                    push_child(&mut stack, element);
                }
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|err| GenError::SchemaParse(err.to_string()))?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                append_text(&mut stack, &text);
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(GenError::SchemaParse(err.to_string())),
            _ => {}
        }
        buf.clear();
    }

    // Elements left open at EOF still contribute what they contained.
    while stack.len() > 1 {
        let element = stack.pop().unwrap();
        push_child(&mut stack, element);
    }

    Ok(stack.pop().unwrap())
}

fn element_from(event: &BytesStart<'_>) -> Result<Element, GenError> {
    let name = String::from_utf8_lossy(event.name().as_ref()).into_owned();
    let mut lang = None;
    for attr in event.attributes() {
        let attr = attr.map_err(|err| GenError::SchemaParse(err.to_string()))?;
        if attr.key.as_ref() == b"lang" {
            let value = attr
                .unescape_value()
                .map_err(|err| GenError::SchemaParse(err.to_string()))?;
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                lang = Some(trimmed.to_string());
            }
        }
    }
    Ok(Element {
        name,
        lang,
        ..Element::default()
    })
}

fn push_child(stack: &mut Vec<Element>, element: Element) {
    stack
        .last_mut()
        .expect("tree stack always holds the synthetic root")
        .children
        .push(element);
}

fn append_text(stack: &mut Vec<Element>, text: &str) {
    let top = stack
        .last_mut()
        .expect("tree stack always holds the synthetic root");
    if !top.text.is_empty() {
        top.text.push(' ');
    }
    top.text.push_str(text);
}

/// Depth-first descendant query for field-defining elements. Fields are a
/// flat enumeration; anything nested inside one is not searched further.
fn collect_fields(element: &Element, out: &mut Vec<RawField>) {
    for child in &element.children {
        if child.name == FIELD_TAG {
            if let Some(field) = extract_field(child) {
                out.push(field);
            }
        } else {
            collect_fields(child, out);
        }
    }
}

/// Returns `None` when the element has no usable `<name>`, which silently
/// drops the field rather than raising an error.
fn extract_field(element: &Element) -> Option<RawField> {
    let key = child_text(element, "name")?;

    let label = pick_localized(&variants(element, "label"));
    let help_text = pick_localized(&variants(element, "helpText"));
    let default_value = child_text(element, "defaultValue");

    let mut options = Vec::new();
    for list in element.children.iter().filter(|c| c.name == "options") {
        for option in list.children.iter().filter(|c| c.name == "option") {
            let id = child_text(option, "id");
            let name = pick_localized(&variants(option, "name"));
            // An option missing either half is dropped, not reported.
            if let (Some(id), Some(name)) = (id, name) {
                options.push(RawOption { id, name });
            }
        }
    }

    Some(RawField {
        key,
        label,
        help_text,
        default_value,
        options,
    })
}

/// Trimmed text of the first direct child with the given tag; `None` when the
/// child is missing or its text is empty after trimming.
fn child_text(element: &Element, tag: &str) -> Option<String> {
    element
        .children
        .iter()
        .find(|c| c.name == tag)
        .map(|c| c.text.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// All declared variants of a textual attribute, in document order, each
/// tagged with its language marker if one was present.
fn variants<'a>(element: &'a Element, tag: &str) -> Vec<(Option<&'a str>, &'a str)> {
    element
        .children
        .iter()
        .filter(|c| c.name == tag)
        .map(|c| (c.lang.as_deref(), c.text.as_str()))
        .collect()
}

/// Localization fallback: prefer the untagged variant, else the first one
/// declared. Applied independently per attribute and per option.
pub fn pick_localized(variants: &[(Option<&str>, &str)]) -> Option<String> {
    variants
        .iter()
        .find(|(lang, _)| lang.is_none())
        .or_else(|| variants.first())
        .map(|(_, text)| text.to_string())
}
