/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::env;
use std::sync::Arc;

use aws_config::BehaviorVersion;

use crate::config::Builder;
use crate::error::Error;
use crate::processing::ImageProcessor;
use crate::types::EdgeThresholds;
use crate::Config;

/// Environment variable naming the bucket that holds the source object.
pub(crate) const ENV_BUCKET_NAME: &str = "BUCKET_NAME";

/// Environment variable naming the key of the source object.
pub(crate) const ENV_SOURCE_KEY: &str = "S3_KEY";

/// Load a [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Set the bucket holding the source object, overriding `BUCKET_NAME`.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.builder = self.builder.bucket(bucket);
        self
    }

    /// Set the key of the source image object, overriding `S3_KEY`.
    pub fn source_key(mut self, key: impl Into<String>) -> Self {
        self.builder = self.builder.source_key(key);
        self
    }

    /// Set the hysteresis thresholds for the edge-detection transform.
    pub fn thresholds(mut self, thresholds: EdgeThresholds) -> Self {
        self.builder = self.builder.thresholds(thresholds);
        self
    }

    /// Set the image-processing backend.
    pub fn processor(mut self, processor: Arc<dyn ImageProcessor>) -> Self {
        self.builder = self.builder.processor(processor);
        self
    }

    /// Set an explicit S3 client, skipping the default AWS config chain.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.builder = self.builder.client(client);
        self
    }

    /// Load the configuration.
    ///
    /// Fields not overridden on the loader are resolved from the environment:
    /// the bucket and key come from `BUCKET_NAME` / `S3_KEY`, and the S3
    /// client is built from the default AWS config chain. A missing bucket or
    /// key is reported as an invalid-configuration error rather than passed
    /// through empty.
    pub async fn load(self) -> Result<Config, Error> {
        let mut builder = self.resolve_env();
        if !builder.has_client() {
            let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
            builder = builder.client(aws_sdk_s3::Client::new(&shared_config));
        }
        builder.build()
    }

    /// Fill the bucket and source key from the environment when unset.
    fn resolve_env(self) -> Builder {
        let mut builder = self.builder;
        if builder.get_bucket().is_none() {
            if let Ok(bucket) = env::var(ENV_BUCKET_NAME) {
                builder = builder.bucket(bucket);
            }
        }
        if builder.get_source_key().is_none() {
            if let Ok(key) = env::var(ENV_SOURCE_KEY) {
                builder = builder.source_key(key);
            }
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use aws_config::Region;

    fn test_client() -> aws_sdk_s3::Client {
        aws_sdk_s3::Client::from_conf(
            aws_sdk_s3::config::Config::builder()
                .region(Region::from_static("us-west-2"))
                .with_test_defaults()
                .build(),
        )
    }

    // Single test so the two scenarios can't race on the process environment.
    #[tokio::test]
    async fn env_resolution_and_missing_env_reporting() {
        env::set_var(ENV_BUCKET_NAME, "env-bucket");
        env::set_var(ENV_SOURCE_KEY, "photos/env.png");

        let config = crate::from_env()
            .client(test_client())
            .load()
            .await
            .unwrap();
        assert_eq!(config.bucket(), "env-bucket");
        assert_eq!(config.source_key(), "photos/env.png");

        // Explicit overrides win over the environment.
        let config = crate::from_env()
            .bucket("explicit-bucket")
            .client(test_client())
            .load()
            .await
            .unwrap();
        assert_eq!(config.bucket(), "explicit-bucket");
        assert_eq!(config.source_key(), "photos/env.png");

        env::remove_var(ENV_BUCKET_NAME);
        env::remove_var(ENV_SOURCE_KEY);

        let err = crate::from_env()
            .client(test_client())
            .load()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidConfig);
    }
}
