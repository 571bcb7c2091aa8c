use std::collections::VecDeque;
use std::io::{self, Read, Write};

use game_core::{Config, MatchState, Params};
use proto::{Frame, HostInput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("Simulation rejected input : {0}")]
    Sim(#[from] game_core::Error),

    #[error("Frame encoding failed : {0}")]
    Encode(#[from] postcard::Error),

    #[error("Recording I/O failed : {0}")]
    Io(#[from] io::Error),

    #[error("Touch rate must lie in [0, 1], got {0}")]
    InvalidTouchRate(f64),

    #[error("Recording holds a {0} byte record, larger than any frame")]
    OversizedRecord(u32),
}

/// Upper bound on an encoded [`Frame`]; postcard varints keep real ones under 50 bytes
const MAX_RECORD_LEN: u32 = 256;

/// Somewhere to send rendered frames
pub trait FrameSink {
    fn send_frame(&mut self, frame: &Frame) -> Result<(), HostError>;

    /// Called once after the last frame
    fn finish(&mut self) -> Result<(), HostError> {
        Ok(())
    }
}

/// Writes frames as length-prefixed postcard records
pub struct Recorder<W: Write> {
    out: W,
}

impl<W: Write> Recorder<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FrameSink for Recorder<W> {
    fn send_frame(&mut self, frame: &Frame) -> Result<(), HostError> {
        let bytes = frame.to_bytes()?;
        self.out.write_all(&(bytes.len() as u32).to_le_bytes())?;
        self.out.write_all(&bytes)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HostError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Read back every frame written by a [`Recorder`]
pub fn read_recording<R: Read>(mut input: R) -> Result<Vec<Frame>, HostError> {
    let mut frames = Vec::new();
    let mut len_buf = [0u8; 4];
    loop {
        match input.read_exact(&mut len_buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
        let len = u32::from_le_bytes(len_buf);
        if len > MAX_RECORD_LEN {
            return Err(HostError::OversizedRecord(len));
        }
        let mut record = vec![0u8; len as usize];
        input.read_exact(&mut record)?;
        frames.push(Frame::from_bytes(&record)?);
    }
    Ok(frames)
}

/// Stand-in for a window: owns the match, feeds it inputs and frame ticks,
/// and hands each resulting frame to an optional sink.
pub struct Host {
    pub game: MatchState,
    inputs: VecDeque<HostInput>,
    rng: StdRng,
    touch_rate: f64,
    sink: Option<Box<dyn FrameSink>>,
}

impl Host {
    pub fn new(config: Config, seed: u64, touch_rate: f64) -> Result<Self, HostError> {
        if !(0.0..=1.0).contains(&touch_rate) {
            return Err(HostError::InvalidTouchRate(touch_rate));
        }
        let game = MatchState::new(config)?;
        log::info!(
            "Match started on a {}x{} court",
            game.config().court_width,
            game.config().court_height
        );
        Ok(Self {
            game,
            inputs: VecDeque::new(),
            rng: StdRng::seed_from_u64(seed),
            touch_rate,
            sink: None,
        })
    }

    pub fn with_sink(mut self, sink: Box<dyn FrameSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn push_input(&mut self, input: HostInput) {
        self.inputs.push_back(input);
    }

    /// Advance one frame: maybe add a random drag, apply queued inputs, tick,
    /// then publish the frame.
    pub fn step(&mut self) -> Result<Frame, HostError> {
        if self.touch_rate > 0.0 && self.rng.gen_bool(self.touch_rate) {
            let touch = self.random_touch();
            self.push_input(touch);
        }
        self.push_input(HostInput::Tick {
            dt: Params::FRAME_DT,
        });

        while let Some(input) = self.inputs.pop_front() {
            self.apply(input)?;
        }

        let frame = self.frame_snapshot();
        if let Some(sink) = self.sink.as_mut() {
            sink.send_frame(&frame)?;
        }
        Ok(frame)
    }

    /// Flush the sink once the run is over
    pub fn finish(&mut self) -> Result<(), HostError> {
        match self.sink.as_mut() {
            Some(sink) => sink.finish(),
            None => Ok(()),
        }
    }

    fn apply(&mut self, input: HostInput) -> Result<(), HostError> {
        match input {
            HostInput::PointerMove { x, y } => {
                // A bad touch sample is dropped, the match carries on
                if let Err(e) = self.game.handle_pointer_move(x, y) {
                    log::debug!("Skipped pointer input : {e}");
                }
            }
            HostInput::Tick { dt } => {
                let events = self.game.update(dt)?;
                if events.any_score() {
                    let score = self.game.score();
                    log::info!(
                        "Frame {}: score {} - {}",
                        self.game.time().frame,
                        score.left,
                        score.right
                    );
                }
                if self.game.time().frame % 60 == 0 {
                    log::debug!(
                        "Frame {}, ball at {}",
                        self.game.time().frame,
                        self.game.ball().pos
                    );
                }
            }
        }
        Ok(())
    }

    /// Drag somewhere inside one of the two paddle zones
    fn random_touch(&mut self) -> HostInput {
        let config = self.game.config();
        let zone = config.court_width / 3.0;
        let x = if self.rng.gen_bool(0.5) {
            self.rng.gen_range(0.0..zone)
        } else {
            config.court_width - self.rng.gen_range(0.0..zone)
        };
        let y = self.rng.gen_range(0.0..=config.court_height);
        HostInput::PointerMove { x, y }
    }

    pub fn frame_snapshot(&self) -> Frame {
        let ball = self.game.ball();
        let score = self.game.score();
        Frame {
            frame: self.game.time().frame,
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            ball_vx: ball.vel.x,
            ball_vy: ball.vel.y,
            paddle_left_y: self.game.player1().pos.y,
            paddle_right_y: self.game.player2().pos.y,
            score_left: score.left,
            score_right: score.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct MockSink {
        frames: Rc<RefCell<Vec<Frame>>>,
    }

    impl FrameSink for MockSink {
        fn send_frame(&mut self, frame: &Frame) -> Result<(), HostError> {
            self.frames.borrow_mut().push(*frame);
            Ok(())
        }
    }

    fn setup_host(touch_rate: f64) -> Host {
        Host::new(Config::new(), 12345, touch_rate).unwrap()
    }

    #[test]
    fn test_step_without_touches_moves_ball() {
        let mut host = setup_host(0.0);

        let frame = host.step().unwrap();

        assert_eq!(frame.frame, 1);
        assert_eq!((frame.ball_x, frame.ball_y), (104.0, 100.0));
        assert_eq!((frame.ball_vx, frame.ball_vy), (4.0, 0.0));
        assert_eq!((frame.score_left, frame.score_right), (0, 0));
    }

    #[test]
    fn test_queued_pointer_applies_before_tick() {
        let mut host = setup_host(0.0);
        host.push_input(HostInput::PointerMove { x: 10.0, y: 30.0 });
        host.push_input(HostInput::PointerMove { x: 190.0, y: 160.0 });

        let frame = host.step().unwrap();

        assert_eq!(frame.paddle_left_y, 30.0);
        assert_eq!(frame.paddle_right_y, 160.0);
    }

    #[test]
    fn test_bad_pointer_is_skipped() {
        let mut host = setup_host(0.0);
        host.push_input(HostInput::PointerMove {
            x: f32::NAN,
            y: 30.0,
        });

        let frame = host.step().expect("bad pointer is not fatal");

        assert_eq!(frame.paddle_left_y, 100.0);
        assert_eq!(frame.frame, 1);
    }

    #[test]
    fn test_bad_tick_is_fatal() {
        let mut host = setup_host(0.0);
        host.push_input(HostInput::Tick { dt: f32::NAN });

        assert!(matches!(host.step(), Err(HostError::Sim(_))));
    }

    #[test]
    fn test_invalid_touch_rate() {
        assert!(matches!(
            Host::new(Config::new(), 1, 1.5),
            Err(HostError::InvalidTouchRate(_))
        ));
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = setup_host(0.5);
        let mut b = setup_host(0.5);

        for _ in 0..600 {
            assert_eq!(a.step().unwrap(), b.step().unwrap());
        }
    }

    #[test]
    fn test_random_touches_stay_in_paddle_zones() {
        let mut host = setup_host(1.0);
        for _ in 0..200 {
            match host.random_touch() {
                HostInput::PointerMove { x, y } => {
                    assert!(!(200.0 / 3.0..=400.0 / 3.0).contains(&x), "x={x}");
                    assert!((0.0..=200.0).contains(&y));
                }
                other => panic!("unexpected input {other:?}"),
            }
        }
    }

    #[test]
    fn test_frames_reach_sink() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let mut host = setup_host(0.0).with_sink(Box::new(MockSink {
            frames: Rc::clone(&frames),
        }));

        for _ in 0..3 {
            host.step().unwrap();
        }

        let frames = frames.borrow();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].frame, 3);
        assert_eq!(frames[2].ball_x, 112.0);
    }

    #[test]
    fn test_recording_reads_back() {
        let mut bytes = Vec::new();
        let mut recorder = Recorder::new(&mut bytes);
        let mut host = setup_host(0.3);
        let mut sent = Vec::new();
        for _ in 0..30 {
            let frame = host.step().unwrap();
            recorder.send_frame(&frame).unwrap();
            sent.push(frame);
        }
        recorder.finish().unwrap();

        let read = read_recording(bytes.as_slice()).unwrap();

        assert_eq!(read, sent);
    }

    #[test]
    fn test_truncated_recording_fails() {
        let mut bytes = Vec::new();
        let mut recorder = Recorder::new(&mut bytes);
        recorder
            .send_frame(&setup_host(0.0).frame_snapshot())
            .unwrap();

        assert!(read_recording(&bytes[..bytes.len() - 2]).is_err());
    }

    #[test]
    fn test_oversized_record_is_refused() {
        let mut bytes = u32::MAX.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0u8; 8]);

        assert!(matches!(
            read_recording(bytes.as_slice()),
            Err(HostError::OversizedRecord(u32::MAX))
        ));
    }

    /// Accepts nothing, like a full disk
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_finish_reports_failed_flush() {
        let recorder = Recorder::new(io::BufWriter::new(FullDisk));
        let mut host = setup_host(0.0).with_sink(Box::new(recorder));

        // Frames sit in the buffer until the flush
        host.step().expect("buffered write succeeds");

        assert!(matches!(host.finish(), Err(HostError::Io(_))));
    }

    #[test]
    fn test_finish_without_sink() {
        assert!(setup_host(0.0).finish().is_ok());
    }
}
