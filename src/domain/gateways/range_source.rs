//! Trusted Range Source Gateway
//!
//! Abstract trait for the upstream directory that supplies the trusted
//! CIDR ranges. Consumed as a plain fetch-returning-ranges capability.

use async_trait::async_trait;

use crate::shared::errors::RangeSourceError;

/// Source of the trusted CIDR range list
#[async_trait]
pub trait TrustedRangeSource: Send + Sync {
    /// Fetch the current list of CIDR ranges in string notation
    async fn fetch_ranges(&self) -> Result<Vec<String>, RangeSourceError>;
}
