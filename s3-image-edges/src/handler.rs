/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use lambda_runtime::LambdaEvent;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ErrorKind};
use crate::Client;

/// Response envelope returned to the invoking platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    /// HTTP-style status of the invocation. 200 when the edge map was
    /// uploaded, 404 when the source object does not exist.
    pub status_code: i32,

    /// Human-readable description naming the artifact location.
    pub message: String,
}

/// Handle one invocation: fetch the configured source image, extract its
/// edge map, and upload the result.
///
/// The event payload is opaque; it is logged and otherwise unused. A missing
/// source object is a reported outcome (a 404 envelope), not an invocation
/// failure. Every other error propagates to the runtime and fails the
/// invocation.
pub async fn handle(client: &Client, event: LambdaEvent<Value>) -> Result<ResultEnvelope, Error> {
    tracing::info!(event = %event.payload, "received invocation event");

    match client.extract_edges().send().await {
        Ok(output) => Ok(ResultEnvelope {
            status_code: 200,
            message: format!("image saved to s3://{}/{}", output.bucket(), output.key()),
        }),
        Err(err) if err.kind() == &ErrorKind::SourceMissing => {
            let config = client.config();
            let location = format!("s3://{}/{}", config.bucket(), config.source_key());
            tracing::warn!(%location, "source object not found, nothing to process");
            Ok(ResultEnvelope {
                status_code: 404,
                message: format!("source object not found: {location}"),
            })
        }
        Err(err) => Err(err),
    }
}
