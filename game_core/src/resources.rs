/// Match clock advanced by the host's frame delta
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub frame: u64, // Frames simulated so far
    pub now: f32,   // Total elapsed time in seconds
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: f32) {
        self.frame += 1;
        self.now += dt;
    }
}

/// Both players' points, read off the paddles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Player 1
    pub right: u32, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.left + self.right
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_paddle_hit: bool,
    pub right_paddle_hit: bool,
    pub wall_hit: bool,
    pub left_scored: bool,  // Player 1 won the point
    pub right_scored: bool, // Player 2 won the point
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_paddle_hit = false;
        self.right_paddle_hit = false;
        self.wall_hit = false;
        self.left_scored = false;
        self.right_scored = false;
    }

    pub fn any_score(&self) -> bool {
        self.left_scored || self.right_scored
    }

    pub fn any_bounce(&self) -> bool {
        self.left_paddle_hit || self.right_paddle_hit || self.wall_hit
    }
}
