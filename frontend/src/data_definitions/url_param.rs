//! Route segments carrying serialized state.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


/// Any serde type as a URL-safe base64 CBOR route segment.
///
/// Routable segments need Display, FromStr and Default; this gives all three.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

pub fn encode_segment<T: Serialize>(value: &T) -> Result<String, StateParseError> {
    let mut serialized = Vec::new();
    ciborium::into_writer(value, &mut serialized).map_err(|e| StateParseError::Encode(e.to_string()))?;
    Ok(URL_SAFE.encode(serialized))
}

pub fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, StateParseError> {
    let decoded = URL_SAFE.decode(segment.as_bytes()).map_err(StateParseError::Base64)?;
    ciborium::from_reader(std::io::Cursor::new(decoded)).map_err(StateParseError::Cbor)
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // an unencodable value renders as an empty segment, which parses back to the default
        if let Ok(segment) = encode_segment(self) {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum StateParseError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
    Encode(String),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Cbor(err) => write!(f, "Failed to deserialize: {}", err),
            Self::Encode(err) => write!(f, "Failed to serialize: {}", err),
        }
    }
}

impl std::error::Error for StateParseError {}

impl<T: for<'de> Deserialize<'de> + Default> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        decode_segment(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::facets::FacetField;
    use common::filter_state::FilterState;
    use pretty_assertions::assert_eq;

    #[test]
    fn filter_state_survives_the_url() {
        let mut filters = FilterState::with_global_query("gdp");
        filters.toggle_facet_value(FacetField::Frequency, "Q");
        filters.bookmarks_only = true;

        let segment = UrlParam(filters.clone()).to_string();
        assert!(!segment.contains('/'));
        let parsed: UrlParam<FilterState> = segment.parse().unwrap();
        assert_eq!(parsed.0, filters);
    }

    #[test]
    fn empty_segment_is_default() {
        let parsed: UrlParam<FilterState> = "".parse().unwrap();
        assert_eq!(parsed.0, FilterState::default());
    }

    #[test]
    fn garbage_segment_is_rejected() {
        let err = "not base64!!".parse::<UrlParam<FilterState>>().unwrap_err();
        assert!(matches!(err, StateParseError::Base64(_)));
        assert!(err.to_string().starts_with("Failed to decode base64"));
    }
}
