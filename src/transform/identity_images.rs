use serde_json::Value;

/// Display label for one identity-document image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityImageLabel {
    Front,
    Back,
    /// 1-based position for anything beyond the usual two sides.
    Other(usize),
}

impl std::fmt::Display for IdentityImageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityImageLabel::Front => write!(f, "front"),
            IdentityImageLabel::Back => write!(f, "back"),
            IdentityImageLabel::Other(n) => write!(f, "image {}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityImage {
    pub path: String,
    pub label: IdentityImageLabel,
}

/// Normalizes the two wire encodings of a shipment's identity images into
/// a plain path list: either an array of path strings (current) or a
/// JSON-encoded string of `{path}` objects (legacy). Unparseable input
/// yields `None` so the caller suppresses the section instead of crashing.
pub fn decode_identity_images(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(entries) => Some(paths_from_entries(entries)),
        Value::String(raw) => {
            let parsed: Value = serde_json::from_str(raw).ok()?;
            let entries = parsed.as_array()?;
            Some(paths_from_entries(entries))
        }
        _ => None,
    }
}

fn paths_from_entries(entries: &[Value]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(path) => Some(path.clone()),
            Value::Object(obj) => obj
                .get("path")
                .and_then(|p| p.as_str())
                .map(|p| p.to_string()),
            _ => None,
        })
        .collect()
}

/// Attaches a display label to each path. A "front"/"back" substring in
/// the filename wins; otherwise the first image is assumed to be the front
/// side and the second the back.
pub fn label_identity_images(paths: &[String]) -> Vec<IdentityImage> {
    paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let file_name = path.rsplit('/').next().unwrap_or(path.as_str()).to_lowercase();
            let label = if file_name.contains("front") {
                IdentityImageLabel::Front
            } else if file_name.contains("back") {
                IdentityImageLabel::Back
            } else {
                match index {
                    0 => IdentityImageLabel::Front,
                    1 => IdentityImageLabel::Back,
                    n => IdentityImageLabel::Other(n + 1),
                }
            };
            IdentityImage {
                path: path.clone(),
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_encoding_passes_through() {
        let value = json!(["a.jpg", "b.jpg"]);
        assert_eq!(
            decode_identity_images(&value),
            Some(vec!["a.jpg".to_string(), "b.jpg".to_string()])
        );
    }

    #[test]
    fn test_legacy_string_encoding_is_decoded() {
        let value = json!(r#"[{"path":"a.jpg"},{"path":"b.jpg"}]"#);
        assert_eq!(
            decode_identity_images(&value),
            Some(vec!["a.jpg".to_string(), "b.jpg".to_string()])
        );
    }

    #[test]
    fn test_invalid_json_string_returns_none() {
        assert_eq!(decode_identity_images(&json!("not json {")), None);
        assert_eq!(decode_identity_images(&json!(42)), None);
        assert_eq!(decode_identity_images(&json!(null)), None);
    }

    #[test]
    fn test_mixed_array_keeps_only_usable_entries() {
        let value = json!(["a.jpg", {"path": "b.jpg"}, 3, {"url": "c.jpg"}]);
        assert_eq!(
            decode_identity_images(&value),
            Some(vec!["a.jpg".to_string(), "b.jpg".to_string()])
        );
    }

    #[test]
    fn test_positional_labels() {
        let paths = vec![
            "uploads/id1.jpg".to_string(),
            "uploads/id2.jpg".to_string(),
            "uploads/id3.jpg".to_string(),
        ];
        let labeled = label_identity_images(&paths);
        assert_eq!(labeled[0].label, IdentityImageLabel::Front);
        assert_eq!(labeled[1].label, IdentityImageLabel::Back);
        assert_eq!(labeled[2].label, IdentityImageLabel::Other(3));
        assert_eq!(labeled[2].label.to_string(), "image 3");
    }

    #[test]
    fn test_filename_hint_beats_position() {
        let paths = vec![
            "uploads/id-back.jpg".to_string(),
            "uploads/id-front.jpg".to_string(),
        ];
        let labeled = label_identity_images(&paths);
        assert_eq!(labeled[0].label, IdentityImageLabel::Back);
        assert_eq!(labeled[1].label, IdentityImageLabel::Front);
    }
}
