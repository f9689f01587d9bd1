//! Page Section Codec
//!
//! Persisted form of a page's `contentSections`: a JSON array of tagged
//! section objects. Decoding validates every element and reports the
//! element index in field paths (`[3].title`).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{FieldError, SectionError, ValidationError};
use crate::models::ContentSection;
use crate::schema::parse_section;

/// Encode sections as a JSON array.
pub fn to_json(sections: &[ContentSection]) -> Result<String, SectionError> {
    Ok(serde_json::to_string(sections)?)
}

/// Decode and validate a JSON array of sections.
pub fn from_json(json: &str) -> Result<Vec<ContentSection>, SectionError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Validate an already-parsed `contentSections` array.
///
/// Every element is checked; the error lists all failures, not just the
/// first one.
pub fn from_value(value: &Value) -> Result<Vec<ContentSection>, SectionError> {
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::single("", "Content sections must be a JSON array"))?;

    let mut sections = Vec::with_capacity(items.len());
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let prefix = format!("[{}]", index);
        match parse_section(item) {
            Ok(section) => sections.push(section),
            Err(SectionError::Validation(v)) => errors.extend(v.prefixed(&prefix).errors),
            Err(SectionError::UnknownSectionType(t)) => errors.push(
                FieldError::new("type", format!("Unknown section type: {}", t)).prefixed(&prefix),
            ),
            Err(e) => return Err(e),
        }
    }

    if errors.is_empty() {
        tracing::debug!(count = sections.len(), "Decoded content sections");
        Ok(sections)
    } else {
        tracing::debug!(failures = errors.len(), "Rejected content sections");
        Err(ValidationError::new(errors).into())
    }
}

/// Page document holding the section list.
///
/// Deserializing goes through the same validation as
/// [`PageSections::from_json`]; there is no unchecked decode path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSections {
    pub content_sections: Vec<ContentSection>,
}

impl PageSections {
    pub fn new(content_sections: Vec<ContentSection>) -> Self {
        Self { content_sections }
    }

    pub fn to_json(&self) -> Result<String, SectionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a page document, validating every section.
    ///
    /// Error paths are rooted at `contentSections` (`contentSections[1].title`).
    pub fn from_json(json: &str) -> Result<Self, SectionError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, SectionError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::single("", "Page document must be a JSON object"))?;

        let content_sections = match object.get("contentSections") {
            None | Some(Value::Null) => Vec::new(),
            Some(sections) => from_value(sections).map_err(|e| match e {
                SectionError::Validation(v) => SectionError::Validation(v.prefixed("contentSections")),
                other => other,
            })?,
        };

        Ok(Self { content_sections })
    }
}

impl<'de> Deserialize<'de> for PageSections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        PageSections::from_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HeroSection, SectionType};
    use crate::schema::create_section;
    use serde_json::json;

    fn all_sections() -> Vec<ContentSection> {
        SectionType::ALL.into_iter().map(create_section).collect()
    }

    #[test]
    fn test_round_trip() {
        let sections = all_sections();
        let json = to_json(&sections).unwrap();
        assert_eq!(from_json(&json).unwrap(), sections);
    }

    #[test]
    fn test_errors_carry_element_index() {
        let json = json!([
            { "type": "text", "content": "Day one in Hanoi" },
            { "type": "hero", "title": "Ha Long Bay" },
            { "type": "gallery", "images": [] }
        ])
        .to_string();

        match from_json(&json) {
            Err(SectionError::Validation(v)) => {
                assert!(v.has_field("[1].backgroundImage"));
                assert!(v.has_field("[2].images"));
                assert!(!v.errors.iter().any(|e| e.path.starts_with("[0]")));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_reported_per_element() {
        let json = json!([{ "type": "video" }]).to_string();
        let err = from_json(&json).unwrap_err();
        assert_eq!(err.field_errors()[0].path, "[0].type");
    }

    #[test]
    fn test_non_array_rejected() {
        let err = from_json(r#"{"type":"text"}"#).unwrap_err();
        assert!(matches!(err, SectionError::Validation(_)));

        let err = from_json("not json").unwrap_err();
        assert!(matches!(err, SectionError::Serialization(_)));
    }

    #[test]
    fn test_page_document() {
        let page = PageSections::new(all_sections());
        let json = page.to_json().unwrap();
        assert!(json.starts_with(r#"{"contentSections":["#));
        assert_eq!(PageSections::from_json(&json).unwrap(), page);

        assert!(PageSections::from_json("{}").unwrap().content_sections.is_empty());
    }

    #[test]
    fn test_float_values_survive_round_trip() {
        for opacity in [0.9856906946328695, 0.21291890726713458, 0.9259338926496359, 0.44166130716816643] {
            let section = ContentSection::Hero(HeroSection {
                background_image: "/a.jpg".into(),
                title: "Tromsø".into(),
                overlay_opacity: opacity,
                parallax_speed: opacity * 2.0,
                ..HeroSection::default()
            });
            let json = to_json(std::slice::from_ref(&section)).unwrap();
            assert_eq!(from_json(&json).unwrap(), vec![section]);
        }
    }

    #[test]
    fn test_serde_decode_validates_sections() {
        let json = json!({ "contentSections": [{ "type": "gallery", "images": [] }] }).to_string();
        let err = serde_json::from_str::<PageSections>(&json).unwrap_err();
        assert!(err.to_string().contains("contentSections[0].images"));

        let page = PageSections::new(all_sections());
        let decoded: PageSections = serde_json::from_str(&page.to_json().unwrap()).unwrap();
        assert_eq!(decoded, page);
    }

    #[test]
    fn test_page_document_error_paths() {
        let json = json!({ "contentSections": [{ "type": "image" }] }).to_string();
        let err = PageSections::from_json(&json).unwrap_err();
        assert_eq!(err.field_errors()[0].path, "contentSections[0].image");
    }
}
