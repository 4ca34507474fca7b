use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

pub const INITIAL_FOCUS_SCORE: u8 = 75;
const MAX_SCORE: i32 = 100;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FocusState {
    #[default]
    Calibrating,
    Focused,
    Distracted,
    Away,
}

impl FocusState {
    pub fn label(&self) -> &'static str {
        match self {
            FocusState::Calibrating => "CALIBRATING",
            FocusState::Focused => "FOCUSED",
            FocusState::Distracted => "DISTRACTED",
            FocusState::Away => "AWAY",
        }
    }

    /// BGR overlay colour for annotated frames.
    pub fn color(&self) -> [u8; 3] {
        match self {
            FocusState::Focused => [0, 255, 0],
            FocusState::Distracted => [0, 165, 255],
            FocusState::Away => [0, 0, 255],
            FocusState::Calibrating => [255, 255, 255],
        }
    }
}

/// Axis-aligned face rectangle in pixel coordinates.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FaceBox {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// What the classifier needs from one frame: its size and the detector output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FrameObservation {
    pub frame_width: f64,
    pub frame_height: f64,
    #[serde(default)]
    pub faces: Vec<FaceBox>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FocusSession {
    pub state: FocusState,
    pub score: u8,
}

impl FocusSession {
    pub fn new() -> Self {
        Self {
            state: FocusState::Calibrating,
            score: INITIAL_FOCUS_SCORE,
        }
    }

    fn adjust(&mut self, state: FocusState, delta: i32) {
        self.state = state;
        self.score = (i32::from(self.score) + delta).clamp(0, MAX_SCORE) as u8;
    }

    /// Applies one frame. Only the first detected face is considered.
    pub fn observe(&mut self, observation: &FrameObservation) -> FocusState {
        let (state, delta) = classify(observation);
        self.adjust(state, delta);
        state
    }
}

impl Default for FocusSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps one frame to a state and a score delta.
///
/// A face whose centre sits in the lower 40% of the frame means the student
/// is looking down at their book. A centred face means they are looking at
/// the screen. Anything else, including no face at all, counts as away.
pub fn classify(observation: &FrameObservation) -> (FocusState, i32) {
    let face = match observation.faces.first() {
        Some(face) => face,
        None => return (FocusState::Away, -3),
    };

    let (w, h) = (observation.frame_width, observation.frame_height);
    if w <= 0.0 || h <= 0.0 {
        return (FocusState::Away, -2);
    }

    let (x_center, y_center) = face.center();
    let centered = |v: f64| 0.3 < v && v < 0.7;

    if y_center > h * 0.6 {
        (FocusState::Focused, 1)
    } else if centered(x_center / w) && centered(y_center / h) {
        (FocusState::Distracted, -1)
    } else {
        (FocusState::Away, -2)
    }
}

/// Creates a focus cell: one writer for the frame callback, any number of readers.
pub fn focus_cell() -> (FocusWriter, FocusReader) {
    let shared = Arc::new(RwLock::new(FocusSession::new()));
    (
        FocusWriter {
            shared: Arc::clone(&shared),
        },
        FocusReader { shared },
    )
}

/// The only handle that can change the focus session. Not `Clone`.
pub struct FocusWriter {
    shared: Arc<RwLock<FocusSession>>,
}

impl FocusWriter {
    pub fn observe(&self, observation: &FrameObservation) -> FocusSession {
        let mut session = self.shared.write().unwrap_or_else(PoisonError::into_inner);
        session.observe(observation);
        *session
    }

    pub fn reader(&self) -> FocusReader {
        FocusReader {
            shared: Arc::clone(&self.shared),
        }
    }
}

#[derive(Clone)]
pub struct FocusReader {
    shared: Arc<RwLock<FocusSession>>,
}

impl FocusReader {
    pub fn snapshot(&self) -> FocusSession {
        *self.shared.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Focused,
    Distracted,
    Away,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ManualFocusUpdate {
    pub score: u8,
    pub state: FocusState,
    pub message: String,
}

/// Self-reported focus tracking used when no camera is available.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ManualFocus {
    pub score: u8,
}

impl ManualFocus {
    pub fn new() -> Self {
        Self {
            score: INITIAL_FOCUS_SCORE,
        }
    }

    pub fn record(&mut self, activity: Activity) -> ManualFocusUpdate {
        let (state, delta, message) = match activity {
            Activity::Focused => (FocusState::Focused, 10, "✅ FOCUSED - Good job studying!"),
            Activity::Distracted => (FocusState::Distracted, -5, "⚠️ DISTRACTED - Try looking at your book"),
            Activity::Away => (FocusState::Away, -10, "🔴 AWAY - Return to your studies"),
        };
        self.score = (i32::from(self.score) + delta).clamp(0, MAX_SCORE) as u8;

        ManualFocusUpdate {
            score: self.score,
            state,
            message: message.to_string(),
        }
    }
}

impl Default for ManualFocus {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct TimerRequest {
    #[serde(default = "default_study_minutes")]
    pub study_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

fn default_study_minutes() -> u32 {
    25
}

fn default_break_minutes() -> u32 {
    5
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StudyTimer {
    pub study_minutes: u32,
    pub break_minutes: u32,
    pub message: String,
}

pub fn start_study_timer(request: &TimerRequest) -> StudyTimer {
    let study_minutes = request.study_minutes.clamp(10, 120);
    let break_minutes = request.break_minutes.clamp(5, 30);
    StudyTimer {
        study_minutes,
        break_minutes,
        message: format!("Session started: {study_minutes}min study + {break_minutes}min break"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(faces: Vec<FaceBox>) -> FrameObservation {
        FrameObservation {
            frame_width: 640.0,
            frame_height: 480.0,
            faces,
        }
    }

    fn face_at(x_center: f64, y_center: f64) -> FaceBox {
        FaceBox {
            x: x_center - 50.0,
            y: y_center - 50.0,
            width: 100.0,
            height: 100.0,
        }
    }

    #[test]
    fn test_no_face_is_always_away() {
        let mut session = FocusSession::new();
        session.observe(&frame(vec![face_at(320.0, 400.0)]));
        assert_eq!(session.state, FocusState::Focused);

        session.observe(&frame(vec![]));
        assert_eq!(session.state, FocusState::Away);
        assert_eq!(session.score, INITIAL_FOCUS_SCORE + 1 - 3);
    }

    #[test]
    fn test_face_positions() {
        assert_eq!(classify(&frame(vec![face_at(320.0, 300.0)])), (FocusState::Focused, 1));
        assert_eq!(classify(&frame(vec![face_at(320.0, 240.0)])), (FocusState::Distracted, -1));
        assert_eq!(classify(&frame(vec![face_at(40.0, 100.0)])), (FocusState::Away, -2));
        assert_eq!(classify(&frame(vec![])), (FocusState::Away, -3));
    }

    #[test]
    fn test_only_first_face_counts() {
        let faces = vec![face_at(320.0, 240.0), face_at(320.0, 400.0)];
        assert_eq!(classify(&frame(faces)).0, FocusState::Distracted);
    }

    #[test]
    fn test_score_stays_clamped() {
        let mut session = FocusSession::new();
        for _ in 0..200 {
            session.observe(&frame(vec![]));
            assert!(session.score <= 100);
        }
        assert_eq!(session.score, 0);

        for _ in 0..200 {
            session.observe(&frame(vec![face_at(320.0, 420.0)]));
            assert!(session.score <= 100);
        }
        assert_eq!(session.score, 100);
    }

    #[test]
    fn test_reader_sees_writer_updates() {
        let (writer, reader) = focus_cell();
        assert_eq!(reader.snapshot().state, FocusState::Calibrating);

        let written = writer.observe(&frame(vec![]));
        assert_eq!(reader.snapshot(), written);
        assert_eq!(writer.reader().snapshot().state, FocusState::Away);
    }

    #[test]
    fn test_manual_focus_is_bounded() {
        let mut manual = ManualFocus::new();
        for _ in 0..5 {
            manual.record(Activity::Focused);
        }
        assert_eq!(manual.score, 100);

        let update = manual.record(Activity::Distracted);
        assert_eq!(update.score, 95);
        assert_eq!(update.state, FocusState::Distracted);

        for _ in 0..20 {
            manual.record(Activity::Away);
        }
        assert_eq!(manual.score, 0);
    }

    #[test]
    fn test_timer_inputs_are_clamped() {
        let timer = start_study_timer(&TimerRequest {
            study_minutes: 500,
            break_minutes: 1,
        });
        assert_eq!(timer.study_minutes, 120);
        assert_eq!(timer.break_minutes, 5);
        assert_eq!(timer.message, "Session started: 120min study + 5min break");
    }
}
