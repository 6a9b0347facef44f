use crate::domain::model::Testimonial;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEFAULT_AUTOPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Testimonial>,
    current: usize,
}

impl Carousel {
    pub fn new(slides: Vec<Testimonial>) -> Self {
        Self { slides, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Testimonial> {
        self.slides.get(self.current)
    }

    pub fn next(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
    }

    pub fn prev(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        let len = self.slides.len();
        self.current = (self.current + len - 1) % len;
    }

    /// CSS transform for the slide track.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }
}

/// Spawns a timer that emits `make_tick()` every `period` until the receiver
/// is dropped.
pub fn spawn_autoplay<T, F>(period: Duration, tx: mpsc::Sender<T>, make_tick: F) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Fn() -> T + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // the first tick of a tokio interval completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(make_tick()).await.is_err() {
                tracing::debug!("Autoplay stopped: session closed");
                break;
            }
        }
    })
}
