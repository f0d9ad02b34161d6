//! Convert exported regression coefficients (JSON) into the binary model
//! artifact served by the API.
//!
//! Usage: `export-model <coefficients.json> [output.bin]`

use anyhow::{bail, Context};
use inference_engine::{save_artifact, PricePipeline};
use tracing::info;

const DEFAULT_OUTPUT: &str = "carprediction.bin";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: export-model <coefficients.json> [output.bin]");
    };
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let json = std::fs::read_to_string(&input)
        .with_context(|| format!("reading coefficients from {input}"))?;
    let pipeline: PricePipeline =
        serde_json::from_str(&json).with_context(|| format!("parsing coefficients in {input}"))?;

    info!(
        "Exporting pipeline: {} numeric terms, {} categorical columns",
        pipeline.numeric.len(),
        pipeline.categorical.len()
    );
    save_artifact(&pipeline, &output).with_context(|| format!("writing artifact {output}"))?;

    Ok(())
}
