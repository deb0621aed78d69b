//! # Clock（時刻プロバイダ）
//!
//! `Timestamp::now()` や `CalendarDay::today()` の「現在」の取得元を抽象化し、
//! テストで固定時刻を注入可能にする。

use chrono::Utc;

use crate::time::Timestamp;

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from(Utc::now())
    }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
    now: Timestamp,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
    }
}
