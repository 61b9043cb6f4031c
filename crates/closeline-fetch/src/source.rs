//! Price source abstraction.

use async_trait::async_trait;
use closeline_types::{DateRange, FetchGranularity, RawSeries};

use crate::{FetchError, YahooClient};

/// Anything that can produce a close-price series for a ticker.
///
/// An empty series means the source had no data for the request; errors are
/// reserved for failures of the source itself.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches closes for `ticker` over `range` at `granularity`.
    async fn fetch(
        &self,
        ticker: &str,
        range: DateRange,
        granularity: FetchGranularity,
    ) -> Result<RawSeries, FetchError>;
}

#[async_trait]
impl PriceSource for YahooClient {
    async fn fetch(
        &self,
        ticker: &str,
        range: DateRange,
        granularity: FetchGranularity,
    ) -> Result<RawSeries, FetchError> {
        self.chart(ticker, range, granularity).await
    }
}
