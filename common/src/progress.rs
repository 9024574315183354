//! 疑似プログレス
//!
//! サーバーは完了時の結果しか返さないため、進捗はクライアント側で推定する。
//! 開始時に低い値を入れ、一定間隔で上限まで増やし、応答受信で100にする。

use std::time::Duration;

/// 進捗の増やし方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressPlan {
    /// 開始時の値
    pub seed: u8,
    /// 1ティックあたりの増分
    pub step: u8,
    /// 応答受信前の上限
    pub ceiling: u8,
    /// ティック間隔
    pub interval: Duration,
}

impl Default for ProgressPlan {
    fn default() -> Self {
        Self {
            seed: 10,
            step: 10,
            ceiling: 90,
            interval: Duration::from_millis(200),
        }
    }
}

/// 進捗値（0〜100、減少しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEstimator {
    plan: ProgressPlan,
    value: u8,
}

impl ProgressEstimator {
    pub fn new(plan: ProgressPlan) -> Self {
        Self { plan, value: 0 }
    }

    pub fn plan(&self) -> ProgressPlan {
        self.plan
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.value == 100
    }

    /// インポート開始時の初期値を設定
    pub fn start(&mut self) {
        let seed = self.plan.seed.min(self.ceiling());
        self.value = self.value.max(seed);
    }

    /// 1ティック進める（上限で頭打ち、完了後は変化しない）
    pub fn tick(&mut self) -> u8 {
        if !self.is_finished() {
            let ceiling = self.ceiling();
            if self.value < ceiling {
                self.value = self.value.saturating_add(self.plan.step).min(ceiling);
            }
        }
        self.value
    }

    /// 応答受信時に100にする
    pub fn finish(&mut self) {
        self.value = 100;
    }

    fn ceiling(&self) -> u8 {
        self.plan.ceiling.min(99)
    }
}

impl Default for ProgressEstimator {
    fn default() -> Self {
        Self::new(ProgressPlan::default())
    }
}
