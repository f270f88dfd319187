use crate::utils::config;

use super::error::DogApiResult;
use super::types::Breed;

/// Fetches the full breed list from the public dog API.
///
/// Issued once per page load. Any failure is reported to the caller, which
/// logs it and leaves the displayed list untouched; there is no retry.
pub async fn fetch_breeds() -> DogApiResult<Vec<Breed>> {
    let response = reqwest::get(config::BREEDS_ENDPOINT).await?;
    let response = response.error_for_status()?;
    let breeds = response.json::<Vec<Breed>>().await?;

    Ok(breeds)
}
