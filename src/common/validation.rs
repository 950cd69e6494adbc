//! Validation utilities for sketch parameters and deserialization bounds checking

use crate::common::{Result, SketchError};

/// Maximum bucket cap for any store (2^20); higher caps defeat the purpose of a sketch
pub const MAX_BUCKET_LIMIT: u32 = 1 << 20;

/// Maximum serialized sketch size (256MB) to prevent resource exhaustion
pub const MAX_BYTE_SIZE: usize = 256 * 1024 * 1024; // 256MB

/// Validate that a value is a valid probability (0.0 < p < 1.0)
/// Typically used for the relative accuracy parameter alpha
pub fn validate_probability(value: f64, param_name: &str) -> Result<()> {
    if !(0.0 < value && value < 1.0) {
        return Err(SketchError::InvalidParameter {
            param: param_name.to_string(),
            value: value.to_string(),
            constraint: "must be in range (0.0, 1.0) (exclusive)".to_string(),
        });
    }
    Ok(())
}

/// Validate that a bucket cap is positive and within limits
pub fn validate_max_buckets(max_buckets: u32) -> Result<()> {
    if max_buckets == 0 {
        return Err(SketchError::InvalidParameter {
            param: "max_buckets".to_string(),
            value: max_buckets.to_string(),
            constraint: "must be greater than 0".to_string(),
        });
    }
    if max_buckets > MAX_BUCKET_LIMIT {
        return Err(SketchError::InvalidParameter {
            param: "max_buckets".to_string(),
            value: max_buckets.to_string(),
            constraint: format!("must not exceed {}", MAX_BUCKET_LIMIT),
        });
    }
    Ok(())
}

/// Validate that a deserialized byte size doesn't exceed safety limits
pub fn validate_byte_size(size: usize) -> Result<()> {
    if size > MAX_BYTE_SIZE {
        return Err(SketchError::DeserializationError(format!(
            "Deserialized sketch size {} exceeds maximum allowed size {}",
            size, MAX_BYTE_SIZE
        )));
    }
    Ok(())
}

/// Validate minimum required bytes for a deserialization section
pub fn validate_min_size(actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(SketchError::DeserializationError(format!(
            "Insufficient data: need at least {} bytes, got {}",
            required, actual
        )));
    }
    Ok(())
}
