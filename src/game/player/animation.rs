// Tick-driven sprite animation counters
//
// Only frame bookkeeping lives here; slicing sheets and drawing frames is the
// renderer's job.

use std::collections::HashMap;

/// A single animation clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationClip {
    /// Sprite sheet name (e.g. "idle", "run")
    pub name: &'static str,
    /// Number of frames in the sheet
    pub frame_count: usize,
    /// Ticks each frame stays on screen
    pub frame_delay: u32,
}

impl AnimationClip {
    pub const fn new(name: &'static str, frame_count: usize, frame_delay: u32) -> Self {
        Self {
            name,
            frame_count,
            frame_delay,
        }
    }
}

/// Plays looping clips one tick at a time
#[derive(Debug, Clone, Default)]
pub struct AnimationPlayer {
    clips: HashMap<&'static str, AnimationClip>,
    current: &'static str,
    frame: usize,
    counter: u32,
    flip_horizontal: bool,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a player from a clip list, starting on the first clip
    pub fn with_clips(clips: &[AnimationClip]) -> Self {
        let mut player = Self::new();
        for clip in clips {
            player.add_clip(clip.clone());
        }
        if let Some(first) = clips.first() {
            player.play(first.name);
        }
        player
    }

    /// Player sheets: 32px "Mask Dude" frames, 3 ticks per frame
    pub fn player_clips() -> Self {
        Self::with_clips(&[
            AnimationClip::new("idle", 11, 3),
            AnimationClip::new("run", 12, 3),
            AnimationClip::new("jump", 1, 3),
            AnimationClip::new("double_jump", 6, 3),
            AnimationClip::new("fall", 1, 3),
        ])
    }

    /// NPC sheet: 42px "Rock Head" idle, 5 ticks per frame
    pub fn npc_clips() -> Self {
        Self::with_clips(&[AnimationClip::new("idle", 1, 5)])
    }

    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.name, clip);
    }

    /// Switch clips; replaying the current clip keeps its position
    pub fn play(&mut self, name: &'static str) {
        if self.current != name {
            self.current = name;
            self.frame = 0;
            self.counter = 0;
        }
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Advance by one tick
    pub fn tick(&mut self) {
        let Some(clip) = self.clips.get(self.current) else {
            return;
        };
        if self.counter >= clip.frame_delay {
            self.frame = (self.frame + 1) % clip.frame_count.max(1);
            self.counter = 0;
        }
        self.counter += 1;
    }

    pub fn current_animation(&self) -> &'static str {
        self.current
    }

    /// Current frame, always inside the clip's range
    pub fn current_frame(&self) -> usize {
        let max = self
            .clips
            .get(self.current)
            .map(|clip| clip.frame_count.saturating_sub(1))
            .unwrap_or(0);
        self.frame.min(max)
    }
}
