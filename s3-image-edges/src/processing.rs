/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat};

use crate::error::Error;
use crate::types::EdgeThresholds;

mod canny;

pub use canny::CannyProcessor;

/// Image decode/transform/encode capability used by the edge-extraction
/// operation.
///
/// The operation never touches an image library directly; it goes through
/// this trait so tests can substitute a stub and so the transform backend can
/// be swapped without touching the storage flow.
pub trait ImageProcessor: fmt::Debug + Send + Sync {
    /// Decode raw object bytes into an image.
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, Error>;

    /// Produce a single-channel edge map from the image.
    fn detect_edges(&self, image: &DynamicImage, thresholds: EdgeThresholds) -> GrayImage;

    /// Encode the edge map in the given format.
    fn encode(&self, edges: &GrayImage, format: ImageFormat) -> Result<Vec<u8>, Error>;
}

/// Encoding format implied by an object key's extension.
///
/// Unrecognized or missing extensions fall back to PNG.
pub(crate) fn format_for_key(key: &str) -> ImageFormat {
    Path::new(key)
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ImageFormat::from_extension)
        .unwrap_or(ImageFormat::Png)
}
