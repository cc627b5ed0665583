/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

/// Request type for edge extraction from a single object in Amazon S3
pub use input::{ExtractEdgesInput, ExtractEdgesInputBuilder};
/// Response type for edge extraction from a single object in Amazon S3
pub use output::{ExtractEdgesOutput, ExtractEdgesOutputBuilder};

use std::path::Path;
use std::sync::Arc;

use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::io::scratch::Scratch;
use crate::processing;

/// Operation struct for single object edge extraction
#[derive(Clone, Default, Debug)]
pub(crate) struct ExtractEdges;

impl ExtractEdges {
    /// Execute a single `ExtractEdges` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: ExtractEdgesInput,
    ) -> Result<ExtractEdgesOutput, Error> {
        let destination = input.destination_key();
        tracing::info!(
            bucket = input.bucket(),
            source = input.key(),
            destination = %destination,
            "extracting edges"
        );

        let bytes = fetch_source(handle.client(), input.bucket(), input.key()).await?;
        let scratch = Scratch::new(input.scratch_file_name())?;
        scratch.write(&bytes).await?;

        let config = &handle.config;
        let image = config.processor().decode(&bytes)?;
        let edges = config.processor().detect_edges(&image, config.thresholds());
        let encoded = config
            .processor()
            .encode(&edges, processing::format_for_key(&destination))?;
        // Overwrites the original download; the scratch file is the upload source.
        scratch.write(&encoded).await?;

        upload_edges(handle.client(), input.bucket(), &destination, scratch.path()).await
    }
}

/// Fetch the source object into memory.
///
/// A missing source is terminal: it maps to a distinct [`SourceMissing`]
/// error instead of falling through to decode an absent buffer. Any other
/// storage failure propagates as [`StorageError`].
///
/// [`SourceMissing`]: crate::error::ErrorKind::SourceMissing
/// [`StorageError`]: crate::error::ErrorKind::StorageError
async fn fetch_source(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<Bytes, Error> {
    match client.get_object().bucket(bucket).key(key).send().await {
        Ok(resp) => Ok(resp.body.collect().await?.into_bytes()),
        Err(err) => {
            let not_found = err
                .as_service_error()
                .is_some_and(GetObjectError::is_no_such_key)
                || error::is_not_found(&err);
            if not_found {
                tracing::warn!(bucket, key, "the source object does not exist");
                Err(error::source_missing(err))
            } else {
                Err(error::storage(err))
            }
        }
    }
}

async fn upload_edges(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    path: &Path,
) -> Result<ExtractEdgesOutput, Error> {
    let body = ByteStream::from_path(path).await?;
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .send()
        .await
        .map_err(error::storage)?;

    Ok(ExtractEdgesOutput::builder()
        .bucket(bucket)
        .key(key)
        .set_e_tag(resp.e_tag().map(str::to_string))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::processing::ImageProcessor;
    use crate::types::EdgeThresholds;
    use aws_sdk_s3::operation::get_object::GetObjectOutput;
    use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
    use aws_sdk_s3::types::error::NoSuchKey;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};
    use image::{DynamicImage, GrayImage, ImageFormat};

    /// Stub backend so these tests exercise the storage flow alone.
    #[derive(Debug)]
    struct StubProcessor;

    impl ImageProcessor for StubProcessor {
        fn decode(&self, _bytes: &[u8]) -> Result<DynamicImage, Error> {
            Ok(DynamicImage::ImageLuma8(GrayImage::new(4, 4)))
        }

        fn detect_edges(&self, _image: &DynamicImage, _thresholds: EdgeThresholds) -> GrayImage {
            GrayImage::new(4, 4)
        }

        fn encode(&self, _edges: &GrayImage, _format: ImageFormat) -> Result<Vec<u8>, Error> {
            Ok(b"edge bytes".to_vec())
        }
    }

    /// Stub backend that fails the test if the operation reaches decoding.
    #[derive(Debug)]
    struct UnreachableProcessor;

    impl ImageProcessor for UnreachableProcessor {
        fn decode(&self, _bytes: &[u8]) -> Result<DynamicImage, Error> {
            panic!("decode must not run when the source is missing")
        }

        fn detect_edges(&self, _image: &DynamicImage, _thresholds: EdgeThresholds) -> GrayImage {
            panic!("transform must not run when the source is missing")
        }

        fn encode(&self, _edges: &GrayImage, _format: ImageFormat) -> Result<Vec<u8>, Error> {
            panic!("encode must not run when the source is missing")
        }
    }

    fn test_client(s3: aws_sdk_s3::Client, processor: Arc<dyn ImageProcessor>) -> crate::Client {
        let config = crate::Config::builder()
            .bucket("test-bucket")
            .source_key("photos/cat.png")
            .processor(processor)
            .client(s3)
            .build()
            .unwrap();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn uploads_to_the_derived_key() {
        let get_rule = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| {
                r.bucket.as_deref() == Some("test-bucket")
                    && r.key.as_deref() == Some("photos/cat.png")
            })
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"raw image"))
                    .build()
            });
        let put_rule = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.bucket.as_deref() == Some("test-bucket")
                    && r.key.as_deref() == Some("photos/cat-edges.png")
            })
            .then_output(|| PutObjectOutput::builder().e_tag("test-e-tag").build());

        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_rule, &put_rule]);
        let client = test_client(s3, Arc::new(StubProcessor));

        let output = client.extract_edges().send().await.unwrap();
        assert_eq!(output.bucket(), "test-bucket");
        assert_eq!(output.key(), "photos/cat-edges.png");
        assert_eq!(output.e_tag(), Some("test-e-tag"));
        assert_eq!(get_rule.num_calls(), 1);
        assert_eq!(put_rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn explicit_source_overrides_the_configured_one() {
        let get_rule = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.key.as_deref() == Some("scans/dog.jpg"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"raw image"))
                    .build()
            });
        let put_rule = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|r| {
                r.bucket.as_deref() == Some("other-bucket")
                    && r.key.as_deref() == Some("scans/dog-edges.jpg")
            })
            .then_output(|| PutObjectOutput::builder().build());

        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_rule, &put_rule]);
        let client = test_client(s3, Arc::new(StubProcessor));

        let output = client
            .extract_edges()
            .bucket("other-bucket")
            .key("scans/dog.jpg")
            .send()
            .await
            .unwrap();
        assert_eq!(output.key(), "scans/dog-edges.jpg");
        assert_eq!(output.e_tag(), None);
    }

    #[tokio::test]
    async fn missing_source_is_terminal_and_never_decoded() {
        let get_rule = mock!(aws_sdk_s3::Client::get_object)
            .then_error(|| GetObjectError::NoSuchKey(NoSuchKey::builder().build()));

        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_rule]);
        let client = test_client(s3, Arc::new(UnreachableProcessor));

        let err = client.extract_edges().send().await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::SourceMissing);
        assert_eq!(get_rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn other_fetch_errors_propagate_as_storage_errors() {
        let get_rule = mock!(aws_sdk_s3::Client::get_object).then_error(|| {
            GetObjectError::generic(
                aws_sdk_s3::error::ErrorMetadata::builder()
                    .code("AccessDenied")
                    .message("Access Denied")
                    .build(),
            )
        });

        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_rule]);
        let client = test_client(s3, Arc::new(UnreachableProcessor));

        let err = client.extract_edges().send().await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::StorageError);
    }

    #[tokio::test]
    async fn upload_failure_aborts_the_operation() {
        let get_rule = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
            GetObjectOutput::builder()
                .body(ByteStream::from_static(b"raw image"))
                .build()
        });
        let put_rule = mock!(aws_sdk_s3::Client::put_object).then_error(|| {
            PutObjectError::generic(
                aws_sdk_s3::error::ErrorMetadata::builder()
                    .code("InternalError")
                    .message("We encountered an internal error.")
                    .build(),
            )
        });

        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_rule, &put_rule]);
        let client = test_client(s3, Arc::new(StubProcessor));

        let err = client.extract_edges().send().await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::StorageError);
    }

    #[tokio::test]
    async fn undecodable_source_aborts_the_operation() {
        let get_rule = mock!(aws_sdk_s3::Client::get_object).then_output(|| {
            GetObjectOutput::builder()
                .body(ByteStream::from_static(b"definitely not an image"))
                .build()
        });

        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_rule]);
        // Real backend: decoding garbage has to fail.
        let client = test_client(s3, Arc::new(crate::processing::CannyProcessor));

        let err = client.extract_edges().send().await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::ImageInvalid);
    }
}
