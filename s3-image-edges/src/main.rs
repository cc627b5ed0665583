/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Lambda entry point for the edge-extraction handler.

use lambda_runtime::{run, service_fn, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use s3_image_edges::{handler, Client};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = s3_image_edges::from_env().load().await?;
    let client = Client::new(config);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let client = client.clone();
        async move {
            handler::handle(&client, event)
                .await
                .map_err(lambda_runtime::Error::from)
        }
    }))
    .await
}
