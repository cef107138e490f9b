//! Package property parts
//!
//! Reads `docProps/core.xml` for the descriptive properties and
//! `word/styles.xml` for the style id to display-name table. Both parts are
//! optional in a package.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

use super::super::models::CoreProperties;

/// Builtin style names Word stores in lowercase.
const LOWERCASE_BUILTINS: &[&str] = &[
    "normal", "title", "subtitle", "caption", "header", "footer", "quote",
];

/// Parse the core properties part. Fields missing from the part stay empty.
pub(crate) fn parse_core_properties(xml: &str) -> Result<CoreProperties, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut properties = CoreProperties::default();
    let mut current: Option<&'static str> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                current = match e.local_name().as_ref() {
                    b"title" => Some("title"),
                    b"creator" => Some("author"),
                    b"subject" => Some("subject"),
                    _ => None,
                };
            }
            Event::Text(t) => {
                if let Some(field) = current {
                    let value = t.unescape()?;
                    let slot = match field {
                        "title" => &mut properties.title,
                        "author" => &mut properties.author,
                        _ => &mut properties.subject,
                    };
                    slot.push_str(&value);
                }
            }
            Event::End(_) => current = None,
            Event::Eof => break,
            _ => {}
        }
    }

    properties.title = properties.title.trim().to_string();
    properties.author = properties.author.trim().to_string();
    properties.subject = properties.subject.trim().to_string();
    Ok(properties)
}

/// Parse the styles part into a map from style id to display name.
pub(crate) fn parse_style_names(xml: &str) -> Result<HashMap<String, String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut names = HashMap::new();
    let mut current_id: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"style" => {
                current_id = attribute_value(&e, b"w:styleId")?;
            }
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"name" => {
                if let (Some(id), Some(name)) = (current_id.as_ref(), attribute_value(&e, b"w:val")?)
                {
                    names.insert(id.clone(), normalize_style_name(&name));
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"style" => current_id = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(names)
}

fn attribute_value(
    element: &BytesStart<'_>,
    key: &[u8],
) -> Result<Option<String>, quick_xml::Error> {
    match element.try_get_attribute(key)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Capitalize builtin names Word writes in lowercase ("heading 1" -> "Heading 1").
pub(crate) fn normalize_style_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let is_builtin = lower.starts_with("heading ") || LOWERCASE_BUILTINS.contains(&lower.as_str());

    if !is_builtin {
        return name.to_string();
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
