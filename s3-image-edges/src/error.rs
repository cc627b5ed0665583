/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of edge-extraction errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Configuration or operation input validation issues
    InvalidConfig,

    /// The source object does not exist in the bucket
    SourceMissing,

    /// Object storage failed for a reason other than a missing source
    StorageError,

    /// The object bytes could not be decoded or encoded as an image
    ImageInvalid,

    /// I/O errors (scratch file access, response body aggregation, etc)
    IOError,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidConfig => write!(f, "invalid configuration"),
            ErrorKind::SourceMissing => write!(f, "source object not found"),
            ErrorKind::StorageError => write!(f, "object storage error"),
            ErrorKind::ImageInvalid => write!(f, "invalid image data"),
            ErrorKind::IOError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<image::ImageError> for Error {
    fn from(value: image::ImageError) -> Self {
        Self::new(ErrorKind::ImageInvalid, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InvalidConfig, value)
    }
}

pub(crate) fn invalid_config<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InvalidConfig, err)
}

pub(crate) fn source_missing<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::SourceMissing, err)
}

pub(crate) fn storage<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::StorageError, err)
}

/// True when a storage error carries one of the "not found" response codes.
pub(crate) fn is_not_found<E>(err: &E) -> bool
where
    E: ProvideErrorMetadata,
{
    matches!(err.code(), Some("NotFound" | "NoSuchKey" | "NoSuchBucket"))
}
