use crate::{
    app::{App, AppOpts},
    foundation::core::{Fps, Point},
    foundation::error::ChiliResult,
    page::config::PageConfig,
    render::frame::FrameState,
    scroll::smooth::ScrollHost,
    session::script::{Script, ScriptAction, ScriptEvent},
};

/// Counters for a playback run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub events: u64,
    /// Clicks that hit the heading.
    pub heading_clicks: u64,
}

/// Replays a [`Script`] against a freshly mounted [`App`] at the script's frame rate.
///
/// Frame `n` is taken at `n / fps` seconds: the app is advanced by one frame duration (except
/// for frame 0), then every event due by that time is dispatched, then the snapshot is taken.
#[derive(Debug)]
pub struct Session {
    app: App,
    host: ScrollHost,
    events: Vec<ScriptEvent>,
    next_event: usize,
    fps: Fps,
    frame: u64,
    frame_count: u64,
    stats: SessionStats,
}

impl Session {
    #[tracing::instrument(skip(page, script, opts))]
    pub fn new(page: PageConfig, script: &Script, opts: AppOpts) -> ChiliResult<Self> {
        script.validate()?;
        let host = ScrollHost::new();
        let app = App::mount(page, script.viewport, &host, opts)?;
        Ok(Self {
            app,
            host,
            events: script.sorted_events(),
            next_event: 0,
            fps: script.fps,
            frame: 0,
            frame_count: script.frame_count(),
            stats: SessionStats::default(),
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn host(&self) -> &ScrollHost {
        &self.host
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.frame_count
    }

    /// Produce the next frame, or `None` once the script is exhausted.
    pub fn step(&mut self) -> ChiliResult<Option<FrameState>> {
        if self.is_finished() {
            return Ok(None);
        }
        let now = self.fps.frames_to_secs(self.frame);
        if self.frame > 0 {
            self.app.tick(self.fps.frame_duration_secs());
        }

        while let Some(ev) = self.events.get(self.next_event) {
            if ev.at_s > now + 1e-9 {
                break;
            }
            let action = ev.action.clone();
            self.next_event += 1;
            self.dispatch(&action)?;
        }

        let mut state = self.app.snapshot();
        state.time_s = now;
        self.frame += 1;
        self.stats.frames += 1;
        Ok(Some(state))
    }

    fn dispatch(&mut self, action: &ScriptAction) -> ChiliResult<()> {
        tracing::debug!(frame = self.frame, ?action, "dispatch");
        self.stats.events += 1;
        let hit = match *action {
            ScriptAction::Click { x, y } => self.app.click(Point::new(x, y))?,
            ScriptAction::ClickHeading => self.app.click_heading()?,
            ScriptAction::Wheel { delta } => {
                self.app.wheel(delta);
                false
            }
            ScriptAction::Unmount => {
                self.app.unmount();
                false
            }
        };
        if hit {
            self.stats.heading_clicks += 1;
        }
        Ok(())
    }

    /// Play every remaining frame.
    pub fn run(&mut self) -> ChiliResult<Vec<FrameState>> {
        let remaining = self.frame_count.saturating_sub(self.frame);
        let mut frames = Vec::with_capacity(usize::try_from(remaining).unwrap_or(0));
        while let Some(frame) = self.step()? {
            frames.push(frame);
        }
        tracing::info!(
            frames = self.stats.frames,
            events = self.stats.events,
            heading_clicks = self.stats.heading_clicks,
            "session finished"
        );
        Ok(frames)
    }

    /// Play up to and including the frame at `time_s` (clamped to the last frame) and return it.
    pub fn seek(&mut self, time_s: f64) -> ChiliResult<FrameState> {
        let target = self
            .fps
            .secs_to_frames_floor(time_s.max(0.0))
            .min(self.frame_count - 1);
        let mut last = None;
        while self.frame <= target {
            match self.step()? {
                Some(frame) => last = Some(frame),
                None => break,
            }
        }
        match last {
            Some(frame) => Ok(frame),
            None => {
                let mut state = self.app.snapshot();
                state.time_s = self.fps.frames_to_secs(self.frame.saturating_sub(1));
                Ok(state)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/playback.rs"]
mod tests;
