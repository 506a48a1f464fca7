//! カード id を生成する IdGenerator の標準実装（Clock + グローバル単調性）

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::ports::outbound::{Clock, IdGenerator};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Clock とグローバルな前回値から 16 桁 hex の id を生成する標準実装
///
/// 同一ミリ秒内の連続生成では前回値 +1 で単調に進め、重複を出さない。
pub struct StdIdGenerator {
    clock: Arc<dyn Clock>,
}

impl StdIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl IdGenerator for StdIdGenerator {
    fn next_id(&self) -> String {
        // ms をマイクロ秒相当へ広げ、同一ミリ秒内の連番に下位桁を使う
        let base = self.clock.now_ms().saturating_mul(1_000);

        loop {
            let prev = LAST_ID.load(Ordering::SeqCst);
            let next = if prev < base { base } else { prev + 1 };
            if LAST_ID
                .compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return format!("{:016x}", next);
            }
        }
    }
}
