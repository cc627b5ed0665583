/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{ExtractEdges, ExtractEdgesInputBuilder, ExtractEdgesOutput};

/// Fluent builder for constructing a single object edge extraction
#[derive(Debug)]
pub struct ExtractEdgesFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ExtractEdgesInputBuilder,
}

impl ExtractEdgesFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// The bucket holding the source object.
    ///
    /// Defaults to the configured bucket.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(bucket);
        self
    }

    /// The bucket holding the source object.
    pub fn set_bucket(mut self, bucket: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(bucket);
        self
    }

    /// The key of the source image object.
    ///
    /// Defaults to the configured source key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.inner = self.inner.key(key);
        self
    }

    /// The key of the source image object.
    pub fn set_key(mut self, key: Option<String>) -> Self {
        self.inner = self.inner.set_key(key);
        self
    }

    /// Run the edge extraction for a single object
    pub async fn send(self) -> Result<ExtractEdgesOutput, Error> {
        let mut inner = self.inner;
        if inner.get_bucket().is_none() {
            inner = inner.bucket(self.handle.config.bucket());
        }
        if inner.get_key().is_none() {
            inner = inner.key(self.handle.config.source_key());
        }
        let input = inner.build()?;
        ExtractEdges::orchestrate(self.handle, input).await
    }
}
