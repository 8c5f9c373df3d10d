//! Hero slideshow timer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Interval between hero slides.
pub const DEFAULT_HERO_INTERVAL: Duration = Duration::from_secs(8);

/// Slideshow index advanced by a timer scoped to this value.
///
/// The timer only runs while there is more than one image. Changing the image
/// count tears the timer down and installs a new one; dropping the rotation
/// stops it.
pub struct HeroRotation {
    index: Arc<AtomicUsize>,
    count: usize,
    period: Duration,
    timer: Option<JoinHandle<()>>,
}

impl HeroRotation {
    pub fn new(period: Duration) -> Self {
        Self {
            index: Arc::new(AtomicUsize::new(0)),
            count: 0,
            period,
            timer: None,
        }
    }

    pub fn current(&self) -> usize {
        self.index.load(Ordering::Acquire)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Track a new image count. A no-op when the count is unchanged.
    pub fn reset(&mut self, count: usize) {
        if count == self.count {
            return;
        }
        self.stop();
        self.count = count;

        let current = self.current();
        if current >= count {
            self.index.store(0, Ordering::Release);
        }

        if count > 1 {
            self.timer = Some(self.spawn_timer());
        }
    }

    fn spawn_timer(&self) -> JoinHandle<()> {
        let index = Arc::clone(&self.index);
        let count = self.count;
        let period = self.period;

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let _ = index.fetch_update(Ordering::AcqRel, Ordering::Acquire, |i| {
                    Some((i + 1) % count)
                });
            }
        })
    }

    fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for HeroRotation {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_advances_modulo_image_count() {
        let mut rotation = HeroRotation::new(DEFAULT_HERO_INTERVAL);
        rotation.reset(3);
        assert!(rotation.is_running());
        assert_eq!(rotation.current(), 0);

        sleep(Duration::from_millis(8_100)).await;
        assert_eq!(rotation.current(), 1);

        sleep(Duration::from_secs(8)).await;
        assert_eq!(rotation.current(), 2);

        sleep(Duration::from_secs(8)).await;
        assert_eq!(rotation.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_timer_for_single_image() {
        let mut rotation = HeroRotation::new(DEFAULT_HERO_INTERVAL);
        rotation.reset(1);
        assert!(!rotation.is_running());

        sleep(Duration::from_secs(30)).await;
        assert_eq!(rotation.current(), 0);

        rotation.reset(0);
        assert!(!rotation.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_count_change_reinstalls_timer() {
        let mut rotation = HeroRotation::new(Duration::from_secs(1));
        rotation.reset(4);
        sleep(Duration::from_millis(3_100)).await;
        assert_eq!(rotation.current(), 3);

        rotation.reset(2);
        assert!(rotation.is_running());
        assert_eq!(rotation.current(), 0);

        sleep(Duration::from_millis(1_100)).await;
        assert_eq!(rotation.current(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_timer() {
        let mut rotation = HeroRotation::new(Duration::from_secs(1));
        rotation.reset(3);
        let index = Arc::clone(&rotation.index);

        drop(rotation);
        sleep(Duration::from_secs(5)).await;
        assert_eq!(index.load(Ordering::Acquire), 0);
    }
}
