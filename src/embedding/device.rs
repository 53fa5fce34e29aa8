use candle_core::Device;
use tracing::{debug, warn};

use super::error::EmbeddingError;

/// Picks the compute device for the sentence model.
///
/// Tries Metal then CUDA when those features are compiled in; otherwise (or on failure)
/// returns the CPU. Currently always `Ok`.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[allow(unused_mut)]
    let mut failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Sentence model using Metal");
            return Ok(device);
        }
        Err(e) => failures.push(format!("metal: {e}")),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Sentence model using CUDA");
            return Ok(device);
        }
        Err(e) => failures.push(format!("cuda: {e}")),
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, using CPU");
    } else {
        warn!(reason = %failures.join("; "), "GPU device unavailable, falling back to CPU");
    }

    Ok(Device::Cpu)
}
