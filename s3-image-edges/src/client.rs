/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::Config;

/// Edge-extraction client for images stored in Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }
}

impl Client {
    /// Creates a new client from an edge-extraction config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Extract an edge map from a single object in S3.
    ///
    /// Constructs a fluent builder for the
    /// [`ExtractEdges`](crate::operation::extract_edges::builders::ExtractEdgesFluentBuilder)
    /// operation. The bucket and key default to the configured source object
    /// and may be overridden per call.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_image_edges::error::Error;
    ///
    /// async fn extract(client: &s3_image_edges::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .extract_edges()
    ///         .bucket("my-bucket")
    ///         .key("photos/cat.jpg")
    ///         .send()
    ///         .await?;
    ///
    ///     println!("saved to s3://{}/{}", output.bucket(), output.key());
    ///     Ok(())
    /// }
    /// ```
    pub fn extract_edges(&self) -> crate::operation::extract_edges::builders::ExtractEdgesFluentBuilder {
        crate::operation::extract_edges::builders::ExtractEdgesFluentBuilder::new(self.handle.clone())
    }
}
