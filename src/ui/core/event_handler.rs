use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

/// Polls crossterm without blocking the runtime and turns quiet periods
/// into ticks.
pub struct EventHandler {
    tick_rate: Duration,
    poll_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100), // 10 Hz idle ticks
            poll_interval: Duration::from_millis(5), // keeps pointer drags smooth
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        let deadline = Instant::now() + self.tick_rate;

        while Instant::now() < deadline {
            if poll(Duration::from_millis(0))? {
                return Ok(match crossterm::event::read()? {
                    // Windows reports both press and release; only presses drive the grid
                    Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                    Event::Mouse(mouse) => EventType::Mouse(mouse),
                    Event::Resize(w, h) => EventType::Resize(w, h),
                    _ => EventType::Other,
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
