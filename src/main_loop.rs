use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub delta_time_in_secs: f32,
}

/// Frame-rate limited loop, optionally stopping after a fixed number of
/// frames.
pub struct MainLoop {
    desired_fps: f32,
    frame_limit: Option<usize>,
}

impl MainLoop {
    pub fn new(desired_fps: f32) -> Self {
        Self {
            desired_fps,
            frame_limit: None,
        }
    }

    pub fn with_frame_limit(mut self, frame_limit: Option<usize>) -> Self {
        self.frame_limit = frame_limit;
        self
    }

    pub fn iter(&self) -> MainLoopIterator {
        MainLoopIterator {
            desired_delta_time_in_secs: 1.0 / self.desired_fps,
            last_next_time: None,
            next_index: 0,
            frame_limit: self.frame_limit,
        }
    }
}

pub struct MainLoopIterator {
    desired_delta_time_in_secs: f32,
    last_next_time: Option<Instant>,
    next_index: usize,
    frame_limit: Option<usize>,
}

impl MainLoopIterator {
    fn wait_for_next_frame(&mut self) {
        let now = Instant::now();

        // the first frame starts right away
        if let Some(last_next_time) = self.last_next_time.replace(now) {
            let elapsed_in_secs = (now - last_next_time).as_secs_f32();
            let remainder_in_secs = elapsed_in_secs % self.desired_delta_time_in_secs;
            let remaining_time_in_secs = self.desired_delta_time_in_secs - remainder_in_secs;

            if remaining_time_in_secs > 0.0 {
                std::thread::sleep(Duration::from_secs_f32(remaining_time_in_secs));
                self.last_next_time = Some(Instant::now());
            }
        }
    }
}

impl Iterator for MainLoopIterator {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        if self
            .frame_limit
            .map_or(false, |frame_limit| self.next_index >= frame_limit)
        {
            return None;
        }

        self.wait_for_next_frame();

        let frame = Frame {
            index: self.next_index,
            delta_time_in_secs: self.desired_delta_time_in_secs,
        };
        self.next_index += 1;

        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_numbered_and_limited() {
        let main_loop = MainLoop::new(1000.0).with_frame_limit(Some(3));

        let indices = main_loop.iter().map(|frame| frame.index).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn delta_time_follows_desired_fps() {
        let frame = MainLoop::new(50.0).iter().next().unwrap();
        assert!((frame.delta_time_in_secs - 0.02).abs() < f32::EPSILON);
    }

    #[test]
    fn frames_are_paced() {
        let main_loop = MainLoop::new(100.0).with_frame_limit(Some(3));

        let start = Instant::now();
        assert_eq!(main_loop.iter().count(), 3);

        // two waits of about 10ms each after the first frame
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn unlimited_loop_keeps_going() {
        assert_eq!(MainLoop::new(1000.0).iter().take(5).count(), 5);
    }
}
