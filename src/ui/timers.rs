//! [`Scheduler`] backed by window timers

use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;

use crate::core::Scheduler;

/// Milliseconds for a browser timer, saturating at `u32::MAX`
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        // Fire-and-forget: the timeout must outlive this call
        Timeout::new(timer_millis(delay), task).forget();
    }

    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(TimeoutFuture::new(timer_millis(delay)))
    }
}
