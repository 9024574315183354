//! 疑似プログレス用タイマー

use async_trait::async_trait;
use crm_import_common::Ticker;
use gloo::timers::future::TimeoutFuture;
use std::time::Duration;

/// `setTimeout` ベースのタイマー
///
/// Futureが破棄されるとタイマーも解除される。
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTicker;

#[async_trait(?Send)]
impl Ticker for GlooTicker {
    async fn tick(&self, period: Duration) {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
