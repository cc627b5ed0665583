/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! An AWS Lambda handler that extracts edge maps from images stored in Amazon S3.
//!
//! Each invocation fetches a single object from a bucket/key pair, runs a
//! fixed-parameter Canny edge-detection transform over it, and uploads the
//! resulting single-channel edge map back to the same bucket under a key
//! derived from the source key (`photos/cat.jpg` becomes
//! `photos/cat-edges.jpg`).
//!
//! # Examples
//!
//! Load configuration from the environment (`BUCKET_NAME` / `S3_KEY`):
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_image_edges::error::Error> {
//! let config = s3_image_edges::from_env().load().await?;
//! let client = s3_image_edges::Client::new(config);
//! # Ok(())
//! # }
//! ```
//!
//! Run the operation against an explicit source object:
//!
//! ```no_run
//! # async fn example(client: &s3_image_edges::Client) -> Result<(), s3_image_edges::error::Error> {
//! let output = client
//!     .extract_edges()
//!     .bucket("my-bucket")
//!     .key("photos/cat.jpg")
//!     .send()
//!     .await?;
//!
//! println!("edge map saved to s3://{}/{}", output.bucket(), output.key());
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `s3-image-edges`
pub mod error;

/// Common types used by `s3-image-edges`
pub mod types;

/// Image decode/transform/encode capability
pub mod processing;

/// Edge-extraction client
pub mod client;

/// Edge-extraction operations
pub mod operation;

/// Client configuration
pub mod config;

/// Lambda-facing invocation handler
pub mod handler;

/// Internal I/O helpers
pub(crate) mod io;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
