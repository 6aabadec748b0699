// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! Error

use thiserror::Error;

/// Protocol Error
///
/// Both variants are fatal: the whole decode fails and no partial value is
/// returned. Malformed embedded rule-source cells, payloads and PEM keys are
/// tolerated during assembly and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Payload is not valid standard base64
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    /// Bytes do not parse as the expected wire message
    #[error(transparent)]
    Proto(#[from] prost::DecodeError),
}
