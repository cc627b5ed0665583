/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::{self, Error};
use crate::processing::{CannyProcessor, ImageProcessor};
use crate::types::EdgeThresholds;

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
///
/// Every invocation operates on one source object; the bucket and key it
/// lives under are part of the configuration rather than ambient process
/// state, and their presence is validated when the config is built.
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    source_key: String,
    thresholds: EdgeThresholds,
    processor: Arc<dyn ImageProcessor>,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket holding the source object (and receiving the edge map).
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The key of the source image object.
    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    /// The hysteresis thresholds applied by the edge-detection transform.
    pub fn thresholds(&self) -> EdgeThresholds {
        self.thresholds
    }

    /// The image-processing backend used to decode, transform, and encode.
    pub fn processor(&self) -> &dyn ImageProcessor {
        self.processor.as_ref()
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    source_key: Option<String>,
    thresholds: EdgeThresholds,
    processor: Option<Arc<dyn ImageProcessor>>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the bucket holding the source object.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    pub(crate) fn get_bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Set the key of the source image object.
    pub fn source_key(mut self, key: impl Into<String>) -> Self {
        self.source_key = Some(key.into());
        self
    }

    pub(crate) fn get_source_key(&self) -> Option<&str> {
        self.source_key.as_deref()
    }

    /// Set the hysteresis thresholds for the edge-detection transform.
    ///
    /// Default is [`EdgeThresholds::default`] (150/200).
    pub fn thresholds(mut self, thresholds: EdgeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the image-processing backend.
    ///
    /// Default is [`CannyProcessor`].
    pub fn processor(mut self, processor: Arc<dyn ImageProcessor>) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub(crate) fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Consumes the builder and constructs a [`Config`].
    ///
    /// Returns an invalid-configuration error when the bucket, source key, or
    /// S3 client is missing or empty.
    pub fn build(self) -> Result<Config, Error> {
        let bucket = match self.bucket {
            Some(bucket) if !bucket.is_empty() => bucket,
            _ => return Err(error::invalid_config("bucket name not set")),
        };
        let source_key = match self.source_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(error::invalid_config("source object key not set")),
        };
        let client = self
            .client
            .ok_or_else(|| error::invalid_config("S3 client not set"))?;

        Ok(Config {
            bucket,
            source_key,
            thresholds: self.thresholds,
            processor: self
                .processor
                .unwrap_or_else(|| Arc::new(CannyProcessor)),
            client,
        })
    }
}
