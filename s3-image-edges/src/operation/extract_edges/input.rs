/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Suffix inserted before the extension of the source key to name the
/// destination object.
const EDGES_SUFFIX: &str = "-edges";

/// Input type for extracting edges from a single object
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractEdgesInput {
    pub(crate) bucket: String,
    pub(crate) key: String,
}

impl ExtractEdgesInput {
    /// Create a new builder
    pub fn builder() -> ExtractEdgesInputBuilder {
        ExtractEdgesInputBuilder::default()
    }

    /// The bucket holding the source object.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the source image object.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The key the edge map is uploaded under.
    ///
    /// Derived from the source key by inserting `-edges` before the
    /// basename's extension; prefix directories are preserved.
    /// `photos/cat.jpg` becomes `photos/cat-edges.jpg`, and keys without an
    /// extension get a bare `-edges` suffix.
    pub fn destination_key(&self) -> String {
        let (prefix, name) = match self.key.rsplit_once('/') {
            Some((prefix, name)) => (Some(prefix), name),
            None => (None, self.key.as_str()),
        };

        let derived = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{stem}{EDGES_SUFFIX}.{ext}"),
            _ => format!("{name}{EDGES_SUFFIX}"),
        };

        match prefix {
            Some(prefix) => format!("{prefix}/{derived}"),
            None => derived,
        }
    }

    /// File name used for the local scratch copy of the object.
    pub(crate) fn scratch_file_name(&self) -> &str {
        self.key
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("object")
    }
}

/// Builder for [`ExtractEdgesInput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ExtractEdgesInputBuilder {
    bucket: Option<String>,
    key: Option<String>,
}

impl ExtractEdgesInputBuilder {
    /// The bucket holding the source object.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// The bucket holding the source object.
    pub fn set_bucket(mut self, bucket: Option<String>) -> Self {
        self.bucket = bucket;
        self
    }

    /// The bucket holding the source object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// The key of the source image object.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// The key of the source image object.
    pub fn set_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    /// The key of the source image object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consume the builder and construct an [`ExtractEdgesInput`]
    pub fn build(self) -> Result<ExtractEdgesInput, BuildError> {
        let bucket = match self.bucket {
            Some(bucket) if !bucket.is_empty() => bucket,
            Some(_) => return Err(BuildError::invalid_field("bucket", "bucket must not be empty")),
            None => return Err(BuildError::missing_field("bucket", "A bucket is required")),
        };
        let key = match self.key {
            Some(key) if !key.is_empty() => key,
            Some(_) => return Err(BuildError::invalid_field("key", "key must not be empty")),
            None => return Err(BuildError::missing_field("key", "A source key is required")),
        };

        Ok(ExtractEdgesInput { bucket, key })
    }
}
