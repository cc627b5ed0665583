/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use s3_image_edges::types::EdgeThresholds;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "extract")]
#[command(about = "Extracts an edge map from an image in S3 and uploads it next to the source.")]
pub struct Args {
    /// Bucket holding the source object
    #[arg(long)]
    bucket: String,

    /// Key of the source image object
    #[arg(long)]
    key: String,

    /// Weak hysteresis threshold
    #[arg(long, default_value_t = 150.0)]
    low: f32,

    /// Strong hysteresis threshold
    #[arg(long, default_value_t = 200.0)]
    high: f32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = s3_image_edges::from_env()
        .bucket(args.bucket)
        .source_key(args.key)
        .thresholds(EdgeThresholds::new(args.low, args.high))
        .load()
        .await?;
    let client = s3_image_edges::Client::new(config);

    match client.extract_edges().send().await {
        Ok(output) => {
            println!("edge map saved to s3://{}/{}", output.bucket(), output.key());
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", DisplayErrorContext(&err));
            std::process::exit(1);
        }
    }
}
