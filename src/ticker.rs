use async_trait::async_trait;
use crm_import_common::Ticker;
use std::time::Duration;

/// tokioのタイマーで疑似プログレスを進める
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTicker;

#[async_trait(?Send)]
impl Ticker for TokioTicker {
    async fn tick(&self, period: Duration) {
        tokio::time::sleep(period).await;
    }
}
