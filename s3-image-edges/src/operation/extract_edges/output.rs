/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for extracting edges from a single object
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractEdgesOutput {
    /// The bucket the edge map was uploaded to.
    pub bucket: String,

    /// The key the edge map was uploaded under.
    pub key: String,

    /// Entity tag for the uploaded edge map, when the service returned one.
    pub e_tag: Option<String>,
}

impl ExtractEdgesOutput {
    /// Create a new builder
    pub fn builder() -> ExtractEdgesOutputBuilder {
        ExtractEdgesOutputBuilder::default()
    }

    /// The bucket the edge map was uploaded to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key the edge map was uploaded under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Entity tag for the uploaded edge map, when the service returned one.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }
}

/// Builder for [`ExtractEdgesOutput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ExtractEdgesOutputBuilder {
    bucket: Option<String>,
    key: Option<String>,
    e_tag: Option<String>,
}

impl ExtractEdgesOutputBuilder {
    /// The bucket the edge map was uploaded to.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// The key the edge map was uploaded under.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Entity tag for the uploaded edge map.
    pub fn e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    /// Entity tag for the uploaded edge map.
    pub fn set_e_tag(mut self, e_tag: Option<String>) -> Self {
        self.e_tag = e_tag;
        self
    }

    /// Consume the builder and construct an [`ExtractEdgesOutput`]
    pub fn build(self) -> ExtractEdgesOutput {
        ExtractEdgesOutput {
            bucket: self.bucket.unwrap_or_default(),
            key: self.key.unwrap_or_default(),
            e_tag: self.e_tag,
        }
    }
}
