//! Fixed-capacity stack of the last observation frames.
use ndarray::{Array3, ArrayView2, Axis};

/// The last `n_stack` frames, stored in a single preallocated array.
///
/// Frames are written in a circular manner; `cursor` points at the slot of
/// the oldest frame, which is the one overwritten by the next [`push`](Self::push).
#[derive(Debug, Clone)]
pub struct FrameStack {
    frames: Array3<f32>,
    cursor: usize,
}

impl FrameStack {
    /// Creates a stack of `n_stack` zero frames of the given size.
    pub fn new(n_stack: usize, height: usize, width: usize) -> Self {
        assert!(n_stack > 0, "a frame stack needs at least one slot");
        Self {
            frames: Array3::zeros((n_stack, height, width)),
            cursor: 0,
        }
    }

    /// The number of stacked frames.
    pub fn n_stack(&self) -> usize {
        self.frames.len_of(Axis(0))
    }

    /// Replaces all frames with `frame`.
    pub fn fill(&mut self, frame: ArrayView2<f32>) {
        for mut slot in self.frames.outer_iter_mut() {
            slot.assign(&frame);
        }
        self.cursor = 0;
    }

    /// Appends `frame`, evicting the oldest one.
    pub fn push(&mut self, frame: ArrayView2<f32>) {
        self.frames
            .index_axis_mut(Axis(0), self.cursor)
            .assign(&frame);
        self.cursor = (self.cursor + 1) % self.n_stack();
    }

    /// The most recently pushed frame.
    pub fn latest(&self) -> ArrayView2<'_, f32> {
        let n = self.n_stack();
        self.frames.index_axis(Axis(0), (self.cursor + n - 1) % n)
    }

    /// Returns the frames ordered from the oldest to the newest.
    pub fn to_array(&self) -> Array3<f32> {
        let n = self.n_stack();
        let mut out = Array3::zeros(self.frames.raw_dim());
        for (i, mut dst) in out.outer_iter_mut().enumerate() {
            dst.assign(&self.frames.index_axis(Axis(0), (self.cursor + i) % n));
        }
        out
    }
}
