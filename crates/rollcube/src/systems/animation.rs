//! Animation system — advances queued actor tasks by one frame.

use crate::api::config::DelayMode;
use crate::components::actor::ActorBody;
use crate::components::task::AnimationTask;

/// Ordered queue of running animation tasks.
///
/// All tasks run concurrently; order only matters for which mutation is
/// applied first within a frame.
#[derive(Debug, Clone, Default)]
pub struct AnimationQueue {
    tasks: Vec<AnimationTask>,
}

impl AnimationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task behind everything already queued.
    pub fn push(&mut self, task: AnimationTask) {
        self.tasks.push(task);
    }

    /// Advance every task by one frame and drop the finished ones.
    /// Returns the number of tasks removed.
    pub fn step(&mut self, body: &mut ActorBody, mode: DelayMode) -> usize {
        for task in self.tasks.iter_mut() {
            if task.frames_left == 0 {
                continue;
            }
            match mode {
                DelayMode::Overlapping => {
                    if task.delay_elapsed() {
                        task.kind.apply(body);
                    }
                    task.frames_left -= 1;
                    if let Some(delay) = task.delay.as_mut() {
                        *delay -= 1;
                    }
                }
                DelayMode::LeadIn => {
                    if task.delay_elapsed() {
                        task.kind.apply(body);
                        task.frames_left -= 1;
                    } else if let Some(delay) = task.delay.as_mut() {
                        *delay -= 1;
                    }
                }
            }
        }

        let before = self.tasks.len();
        self.tasks.retain(|t| !t.is_finished());
        before - self.tasks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationTask> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn count_scale_frames(mode: DelayMode) -> (usize, i32) {
        let mut queue = AnimationQueue::new();
        let mut body = ActorBody::new(Vec3::ZERO);
        queue.push(AnimationTask::scale_up(2.0, 5).with_delay(2));

        let mut ticks = 0;
        while !queue.is_empty() {
            queue.step(&mut body, mode);
            ticks += 1;
        }
        (ticks, body.scale.x.log2().round() as i32)
    }

    #[test]
    fn overlapping_delay_eats_into_frames() {
        // 5 frames total, the first 2 gated by the delay.
        assert_eq!(count_scale_frames(DelayMode::Overlapping), (5, 3));
    }

    #[test]
    fn lead_in_delay_adds_frames() {
        // 2 frames of waiting, then all 5 frames mutate.
        assert_eq!(count_scale_frames(DelayMode::LeadIn), (7, 5));
    }

    #[test]
    fn finished_tasks_are_removed_same_tick() {
        let mut queue = AnimationQueue::new();
        let mut body = ActorBody::new(Vec3::ZERO);
        queue.push(AnimationTask::spin(1.0, 1));
        queue.push(AnimationTask::fall(0.1, 3));

        assert_eq!(queue.step(&mut body, DelayMode::Overlapping), 1);
        assert_eq!(queue.len(), 1);
        assert!((body.rotation.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn tasks_run_concurrently() {
        let mut queue = AnimationQueue::new();
        let mut body = ActorBody::new(Vec3::ZERO);
        queue.push(AnimationTask::fall(1.0, 2));
        queue.push(AnimationTask::scale_up(2.0, 2));

        queue.step(&mut body, DelayMode::Overlapping);
        queue.step(&mut body, DelayMode::Overlapping);

        assert!(queue.is_empty());
        assert_eq!(body.scale, Vec3::splat(4.0));
        assert_eq!(body.pos.y, -1.0);
        assert_eq!(body.fall_velocity, 2.0);
    }
}
