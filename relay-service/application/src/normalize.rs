//! Reduction of the backend's response variants to a single transcription.
//!
//! Shapes are tried in table order and the first one that yields text wins.

use serde_json::Value;

/// A recognized backend response layout: a name for logs and an extractor
/// that returns the transcription text when the body has this layout.
pub struct ResponseShape {
    pub name: &'static str,
    extract: fn(&Value) -> Option<&str>,
}

impl ResponseShape {
    pub fn extract<'a>(&self, body: &'a Value) -> Option<&'a str> {
        (self.extract)(body)
    }
}

pub const RESPONSE_SHAPES: [ResponseShape; 3] = [
    ResponseShape {
        name: "predictions.transcription.text",
        extract: nested_prediction_text,
    },
    ResponseShape {
        name: "transcription",
        extract: flat_transcription,
    },
    ResponseShape {
        name: "predictions.transcription",
        extract: flat_prediction_text,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedShape {
    pub shape: &'static str,
    pub text: String,
}

/// Returns `None` when no known shape matches.
pub fn normalize_backend_response(body: &Value) -> Option<MatchedShape> {
    RESPONSE_SHAPES.iter().find_map(|shape| {
        shape.extract(body).map(|text| MatchedShape {
            shape: shape.name,
            text: text.to_string(),
        })
    })
}

fn first_prediction(body: &Value) -> Option<&Value> {
    body.get("predictions")?.as_array()?.first()
}

fn nested_prediction_text(body: &Value) -> Option<&str> {
    first_prediction(body)?
        .get("transcription")?
        .get("text")?
        .as_str()
}

fn flat_transcription(body: &Value) -> Option<&str> {
    body.get("transcription")?.as_str()
}

fn flat_prediction_text(body: &Value) -> Option<&str> {
    first_prediction(body)?.get("transcription")?.as_str()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn text_of(body: Value) -> Option<String> {
        normalize_backend_response(&body).map(|matched| matched.text)
    }

    #[test]
    fn nested_prediction_text_is_extracted() {
        let matched = normalize_backend_response(&json!({
            "predictions": [{"filename": "a.wav", "transcription": {"text": "hello"}}]
        }))
        .expect("shape should match");
        assert_eq!(matched.text, "hello");
        assert_eq!(matched.shape, "predictions.transcription.text");
    }

    #[test]
    fn flat_transcription_passes_through() {
        assert_eq!(
            text_of(json!({"filename": "a.wav", "transcription": "hello"})),
            Some("hello".to_string())
        );
    }

    #[test]
    fn flat_prediction_string_is_extracted() {
        let matched = normalize_backend_response(&json!({
            "predictions": [{"transcription": "hello"}, {"transcription": "ignored"}]
        }))
        .expect("shape should match");
        assert_eq!(matched.text, "hello");
        assert_eq!(matched.shape, "predictions.transcription");
    }

    #[test]
    fn nested_shape_takes_priority_over_top_level_field() {
        assert_eq!(
            text_of(json!({
                "transcription": "top level",
                "predictions": [{"transcription": {"text": "nested"}}]
            })),
            Some("nested".to_string())
        );
    }

    #[test]
    fn whitespace_and_empty_text_are_preserved() {
        assert_eq!(
            text_of(json!({"transcription": "line one\n  line two "})),
            Some("line one\n  line two ".to_string())
        );
        assert_eq!(text_of(json!({"transcription": ""})), Some(String::new()));
    }

    #[test]
    fn unrecognized_bodies_do_not_match() {
        let bodies = [
            json!({"predictions": []}),
            json!({"foo": "bar"}),
            json!({"transcription": 42}),
            json!({"transcription": null}),
            json!({"predictions": {"transcription": "not an array"}}),
            json!({"predictions": [{"transcription": {"text": null}}]}),
            json!({"predictions": [{"filename": "a.wav"}]}),
            json!(["hello"]),
            json!("hello"),
        ];
        for body in bodies {
            assert_eq!(normalize_backend_response(&body), None, "body: {body}");
        }
    }
}
