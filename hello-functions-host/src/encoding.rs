//! Encoding and decoding of byte array payloads

use std::convert::Infallible;

/// Required to be implemented by encode error types.
pub trait EncodeError: std::error::Error + 'static {}

impl EncodeError for Infallible {}

impl EncodeError for serde_json::Error {}

/// A payload which can be converted to a vector of bytes
pub trait Encode {
    /// The error type returned when encoding fails.
    type Error: EncodeError;
    /// Convert the payload to a vector of bytes
    fn try_serialize(self) -> Result<Vec<u8>, Self::Error>;
}

impl Encode for Vec<u8> {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Vec<u8>, Self::Error> {
        Ok(self)
    }
}
impl Encode for &[u8] {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Vec<u8>, Self::Error> {
        Ok(self.to_vec())
    }
}
impl Encode for String {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Vec<u8>, Self::Error> {
        Ok(self.into_bytes())
    }
}
impl Encode for &str {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Vec<u8>, Self::Error> {
        Ok(self.as_bytes().to_vec())
    }
}
impl Encode for () {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Vec<u8>, Self::Error> {
        Ok(Vec::new())
    }
}

/// Required to be implemented by extract error types.
pub trait ExtractError: std::error::Error + 'static {}

impl ExtractError for Infallible {}

impl ExtractError for serde_json::Error {}

/// Payload extractor for encodings
pub trait Extract: Sized {
    /// The error type returned when extraction fails.
    type Error: ExtractError;
    /// Convert from a payload to a value
    fn extract(payload: &[u8]) -> Result<Self, Self::Error>;
}

impl Extract for Vec<u8> {
    type Error = Infallible;
    fn extract(payload: &[u8]) -> Result<Self, Self::Error> {
        Ok(payload.to_vec())
    }
}

/// JSON encoding and decoding
pub struct Json<T>(pub T);
impl<T: serde::de::DeserializeOwned> Extract for Json<T> {
    type Error = serde_json::Error;
    fn extract(payload: &[u8]) -> Result<Self, Self::Error> {
        Ok(Json(serde_json::from_slice(payload)?))
    }
}

impl<T: serde::Serialize> Encode for Json<T> {
    type Error = serde_json::Error;
    fn try_serialize(self) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, serde::Serialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn json_round_trips_named_payloads() {
        let payload = Json(Named {
            name: "kvc".to_string(),
        })
        .try_serialize()
        .unwrap();
        let Json(named) = Json::<Named>::extract(&payload).unwrap();
        assert_eq!(named.name, "kvc");
    }

    #[test]
    fn json_extraction_fails_on_malformed_payloads() {
        assert!(Json::<Named>::extract(b"not a json").is_err());
    }
}
