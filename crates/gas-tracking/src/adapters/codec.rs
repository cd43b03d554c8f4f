//! Record codecs.

use crate::errors::CodecError;
use crate::ports::outbound::{record_name, RecordCodec};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default record codec using bincode.
///
/// bincode 1.x with its default options is fixed-int and field-ordered, so
/// equal records always encode to equal bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeCodec;

impl RecordCodec for BincodeCodec {
    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(record).map_err(|e| CodecError::Encode {
            record: record_name::<T>(),
            message: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        bincode::deserialize(bytes).map_err(|e| CodecError::Decode {
            record: record_name::<T>(),
            message: e.to_string(),
        })
    }
}

/// Human-readable JSON codec, for fixtures and store dumps.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(record).map_err(|e| CodecError::Encode {
            record: record_name::<T>(),
            message: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
            record: record_name::<T>(),
            message: e.to_string(),
        })
    }
}
