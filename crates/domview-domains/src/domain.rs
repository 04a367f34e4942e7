//! Domain descriptors as supplied by the caller

use serde::{Deserialize, Serialize};

use crate::error::{DomainViewError, DomainViewResult};

/// One classified domain of a protein chain
///
/// `start`/`end` are in sequence numbering. A structure range, when present,
/// is already in the structure's own numbering and takes precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDescriptor {
    pub id: String,
    pub start: i32,
    pub end: i32,
    #[serde(default, alias = "structureRange", skip_serializing_if = "Option::is_none")]
    pub structure_range: Option<String>,
    #[serde(default, alias = "structureStart", skip_serializing_if = "Option::is_none")]
    pub structure_start: Option<i32>,
    #[serde(default, alias = "structureEnd", skip_serializing_if = "Option::is_none")]
    pub structure_end: Option<i32>,
    /// Overrides the analyzed target chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DomainDescriptor {
    pub fn new(id: impl Into<String>, start: i32, end: i32) -> Self {
        DomainDescriptor {
            id: id.into(),
            start,
            end,
            structure_range: None,
            structure_start: None,
            structure_end: None,
            chain: None,
            color: None,
            label: None,
        }
    }

    pub fn with_structure_range(mut self, range: impl Into<String>) -> Self {
        self.structure_range = Some(range.into());
        self
    }

    pub fn with_structure_span(mut self, start: i32, end: i32) -> Self {
        self.structure_start = Some(start);
        self.structure_end = Some(end);
        self
    }

    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label if set, id otherwise
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Decode a JSON array of domains
    pub fn list_from_json(json: &str) -> DomainViewResult<Vec<DomainDescriptor>> {
        serde_json::from_str(json).map_err(|e| DomainViewError::InvalidDomains(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_from_json() {
        let domains = DomainDescriptor::list_from_json(
            r##"[
                {"id": "d1", "start": 1, "end": 50, "color": "#ff0000"},
                {"id": "d2", "start": 51, "end": 120, "structureRange": "A:210-279", "label": "C-term"},
                {"id": "d3", "start": 121, "end": 130, "structure_start": 5, "structure_end": 14, "chain": "B"}
            ]"##,
        )
        .unwrap();

        assert_eq!(domains.len(), 3);
        assert_eq!(domains[0].color.as_deref(), Some("#ff0000"));
        assert_eq!(domains[1].structure_range.as_deref(), Some("A:210-279"));
        assert_eq!(domains[1].display_name(), "C-term");
        assert_eq!(domains[2], DomainDescriptor::new("d3", 121, 130).with_structure_span(5, 14).with_chain("B"));
        assert_eq!(domains[2].display_name(), "d3");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            DomainDescriptor::list_from_json(r#"[{"id": "d1"}]"#),
            Err(DomainViewError::InvalidDomains(_))
        ));
    }
}
