/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat};
use imageproc::edges::canny;

use crate::error::Error;
use crate::types::EdgeThresholds;

use super::ImageProcessor;

/// Default [`ImageProcessor`] backed by the `image` and `imageproc` crates.
///
/// The transform is a plain Canny pass over the grayscale rendition of the
/// source. For fixed thresholds the output is deterministic: the same input
/// bytes always produce the same edge map.
#[derive(Debug, Clone, Default)]
pub struct CannyProcessor;

impl ImageProcessor for CannyProcessor {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, Error> {
        Ok(image::load_from_memory(bytes)?)
    }

    fn detect_edges(&self, image: &DynamicImage, thresholds: EdgeThresholds) -> GrayImage {
        canny(&image.to_luma8(), thresholds.low, thresholds.high)
    }

    fn encode(&self, edges: &GrayImage, format: ImageFormat) -> Result<Vec<u8>, Error> {
        let mut buf = Cursor::new(Vec::new());
        edges.write_to(&mut buf, format)?;
        Ok(buf.into_inner())
    }
}
