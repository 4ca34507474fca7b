use std::sync::Arc;

use crate::focus::{FaceBox, FocusReader, FocusSession, FocusWriter, FrameObservation};

const FACE_BOX_COLOR: [u8; 3] = [0, 255, 0];
const LINE_THICKNESS: usize = 2;
const STATUS_STRIP_HEIGHT: usize = 12;

/// A decoded BGR24 frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

/// Byte length of a BGR24 frame, or `None` when the size does not fit in memory.
pub fn frame_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(3)
}

impl VideoFrame {
    /// Black frame. Sizes that overflow produce an empty, malformed frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; frame_len(width, height).unwrap_or(0)],
        }
    }

    /// Non-empty and exactly `width * height * 3` bytes long.
    pub fn is_well_formed(&self) -> bool {
        self.width > 0 && self.height > 0 && frame_len(self.width, self.height) == Some(self.data.len())
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        y.checked_mul(self.width)?.checked_add(x)?.checked_mul(3)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        let i = self.offset(x, y)?;
        self.data.get(i..i + 3).map(|p| [p[0], p[1], p[2]])
    }

    fn put_pixel(&mut self, x: usize, y: usize, color: [u8; 3]) {
        if let Some(i) = self.offset(x, y) {
            if let Some(slot) = self.data.get_mut(i..i + 3) {
                slot.copy_from_slice(&color);
            }
        }
    }

    // ITU-R BT.601 luma weights
    pub fn to_gray(&self) -> GrayFrame {
        let data = self
            .data
            .chunks_exact(3)
            .map(|bgr| {
                let (b, g, r) = (f32::from(bgr[0]), f32::from(bgr[1]), f32::from(bgr[2]));
                (0.114 * b + 0.587 * g + 0.299 * r).round() as u8
            })
            .collect();
        GrayFrame {
            width: self.width,
            height: self.height,
            data,
        }
    }

    pub fn draw_rect(&mut self, face: &FaceBox, color: [u8; 3]) {
        let x0 = face.x.max(0.0) as usize;
        let y0 = face.y.max(0.0) as usize;
        let x1 = ((face.x + face.width).max(0.0) as usize).min(self.width.saturating_sub(1));
        let y1 = ((face.y + face.height).max(0.0) as usize).min(self.height.saturating_sub(1));
        if x0 > x1 || y0 > y1 {
            return;
        }

        for t in 0..LINE_THICKNESS {
            for x in x0..=x1 {
                self.put_pixel(x, y0 + t, color);
                self.put_pixel(x, y1.saturating_sub(t), color);
            }
            for y in y0..=y1 {
                self.put_pixel(x0 + t, y, color);
                self.put_pixel(x1.saturating_sub(t), y, color);
            }
        }
    }

    /// Status strip across the top; its length tracks the focus score.
    pub fn draw_status(&mut self, session: &FocusSession) {
        let filled = self.width * usize::from(session.score) / 100;
        let color = session.state.color();
        for y in 0..STATUS_STRIP_HEIGHT.min(self.height) {
            for x in 0..filled {
                self.put_pixel(x, y, color);
            }
        }
    }
}

pub trait FaceDetector: Send + Sync {
    fn detect(&self, frame: &GrayFrame) -> Vec<FaceBox>;
}

/// Optional camera capability; without it the focus page falls back to manual tracking.
#[derive(Clone)]
pub enum FaceDetection {
    Available(Arc<dyn FaceDetector>),
    Unavailable,
}

impl FaceDetection {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Runs the detector over one frame. Malformed frames yield no faces.
///
/// Touches no session state, so callers can run it before taking any lock.
pub fn detect_faces(detector: &dyn FaceDetector, frame: &VideoFrame) -> FrameObservation {
    let faces = if frame.is_well_formed() {
        detector.detect(&frame.to_gray())
    } else {
        log::warn!(
            "dropping malformed {}x{} frame ({} bytes)",
            frame.width,
            frame.height,
            frame.data.len()
        );
        Vec::new()
    };

    FrameObservation {
        frame_width: frame.width as f64,
        frame_height: frame.height as f64,
        faces,
    }
}

/// Draws the first face box and the score strip. Malformed frames pass through untouched.
pub fn annotate(mut frame: VideoFrame, observation: &FrameObservation, session: &FocusSession) -> VideoFrame {
    if frame.is_well_formed() {
        if let Some(face) = observation.faces.first() {
            frame.draw_rect(face, FACE_BOX_COLOR);
        }
        frame.draw_status(session);
    }
    frame
}

/// Runs detection on one frame, updates the focus session and annotates the frame.
pub fn process_frame(writer: &FocusWriter, detector: &dyn FaceDetector, frame: VideoFrame) -> VideoFrame {
    let observation = detect_faces(detector, &frame);
    let session = writer.observe(&observation);
    annotate(frame, &observation, &session)
}

/// Per-frame callback target. Owns the only writer of its focus session.
pub struct FocusProcessor {
    writer: FocusWriter,
    detector: Arc<dyn FaceDetector>,
}

impl FocusProcessor {
    pub fn new(writer: FocusWriter, detector: Arc<dyn FaceDetector>) -> Self {
        Self { writer, detector }
    }

    pub fn reader(&self) -> FocusReader {
        self.writer.reader()
    }

    /// Frame in, annotated frame of the same shape out.
    pub fn recv(&self, frame: VideoFrame) -> VideoFrame {
        process_frame(&self.writer, self.detector.as_ref(), frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{focus_cell, FocusState};

    struct FixedDetector(Vec<FaceBox>);

    impl FaceDetector for FixedDetector {
        fn detect(&self, _frame: &GrayFrame) -> Vec<FaceBox> {
            self.0.clone()
        }
    }

    fn processor(faces: Vec<FaceBox>) -> FocusProcessor {
        let (writer, _reader) = focus_cell();
        FocusProcessor::new(writer, Arc::new(FixedDetector(faces)))
    }

    #[test]
    fn test_grayscale_conversion() {
        let mut frame = VideoFrame::new(2, 1);
        frame.data = vec![255, 255, 255, 0, 0, 255];
        let gray = frame.to_gray();
        assert_eq!(gray.data, vec![255, 76]);
    }

    #[test]
    fn test_recv_keeps_shape_and_updates_state() {
        let face = FaceBox { x: 20.0, y: 60.0, width: 20.0, height: 20.0 };
        let processor = processor(vec![face]);
        let out = processor.recv(VideoFrame::new(64, 80));

        assert_eq!((out.width, out.height), (64, 80));
        assert_eq!(out.data.len(), 64 * 80 * 3);
        let session = processor.reader().snapshot();
        assert_eq!(session.state, FocusState::Focused);
        assert_eq!(out.pixel(20, 70), Some(FACE_BOX_COLOR));
        assert_eq!(out.pixel(0, 0), Some(FocusState::Focused.color()));
    }

    #[test]
    fn test_recv_without_faces_marks_away() {
        let processor = processor(vec![]);
        processor.recv(VideoFrame::new(32, 32));
        let session = processor.reader().snapshot();
        assert_eq!(session.state, FocusState::Away);
        assert_eq!(session.score, 72);
    }

    #[test]
    fn test_oversized_dimensions_are_malformed() {
        let frame = VideoFrame { width: usize::MAX / 2, height: 4, data: Vec::new() };
        assert!(!frame.is_well_formed());
        assert_eq!(frame.pixel(1, 1), None);

        let flat = VideoFrame { width: usize::MAX, height: 0, data: Vec::new() };
        assert!(!flat.is_well_formed());
        assert_eq!(frame_len(usize::MAX, 2), None);
        assert!(VideoFrame::new(usize::MAX, 2).data.is_empty());
    }

    #[test]
    fn test_oversized_frame_counts_as_no_face() {
        let processor = processor(vec![FaceBox { x: 0.0, y: 0.0, width: 1.0, height: 1.0 }]);
        let frame = VideoFrame { width: usize::MAX / 2, height: 4, data: vec![0; 12] };
        let out = processor.recv(frame.clone());
        assert_eq!(out, frame);
        assert_eq!(processor.reader().snapshot().state, FocusState::Away);
    }

    #[test]
    fn test_detection_is_separate_from_session_update() {
        let detector = FixedDetector(vec![FaceBox { x: 10.0, y: 10.0, width: 12.0, height: 12.0 }]);
        let frame = VideoFrame::new(32, 32);
        let observation = detect_faces(&detector, &frame);
        assert_eq!(observation.faces.len(), 1);
        assert_eq!(observation.frame_width, 32.0);

        let (writer, reader) = focus_cell();
        assert_eq!(reader.snapshot().state, FocusState::Calibrating);
        let session = writer.observe(&observation);
        let out = annotate(frame, &observation, &session);
        assert_eq!(out.pixel(10, 16), Some(FACE_BOX_COLOR));
    }

    #[test]
    fn test_malformed_frame_passes_through() {
        let processor = processor(vec![]);
        let frame = VideoFrame { width: 4, height: 4, data: vec![1, 2, 3] };
        let out = processor.recv(frame.clone());
        assert_eq!(out, frame);
    }
}
