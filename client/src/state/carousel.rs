//! Rotation state for the hero image carousel and testimonial slider.
//!
//! DESIGN
//! ======
//! `IndexRing` owns the wraparound arithmetic; `CarouselState` layers the
//! autoplay flag and a simulated clock on top. The browser interval only
//! feeds elapsed time into `elapse`, so every timing rule is testable
//! without a DOM.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Autoplay period between automatic advances.
pub const AUTOPLAY_PERIOD_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one item.
    Empty,
    /// Requested slide does not exist.
    OutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "carousel has no items"),
            Self::OutOfRange { index, len } => write!(f, "slide {index} out of range (len {len})"),
        }
    }
}

impl std::error::Error for CarouselError {}

/// Fixed-length cursor with wraparound at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRing {
    len: usize,
    current: usize,
}

impl IndexRing {
    /// # Errors
    ///
    /// Returns [`CarouselError::Empty`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { len, current: 0 })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// # Errors
    ///
    /// Returns [`CarouselError::OutOfRange`] and leaves the cursor untouched
    /// when `index >= len`.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange { index, len: self.len });
        }
        self.current = index;
        Ok(())
    }

    #[must_use]
    pub fn is_current(&self, index: usize) -> bool {
        self.current == index
    }

    /// One-based position label, e.g. `"2 / 3"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}

/// Image carousel with autoplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    ring: IndexRing,
    playing: bool,
    since_tick_ms: u32,
}

impl CarouselState {
    /// New carousel positioned on the first item with autoplay running.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Empty`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        Ok(Self { ring: IndexRing::new(len)?, playing: true, since_tick_ms: 0 })
    }

    #[must_use]
    pub fn ring(&self) -> &IndexRing {
        &self.ring
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.ring.current()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn advance(&mut self) {
        self.ring.advance();
    }

    pub fn retreat(&mut self) {
        self.ring.retreat();
    }

    /// # Errors
    ///
    /// See [`IndexRing::jump_to`].
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.ring.jump_to(index)
    }

    /// Flip autoplay. The period restarts because the interval is rebuilt.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        self.since_tick_ms = 0;
    }

    /// Feed elapsed time into the autoplay clock and return how many
    /// advances fired. Paused carousels ignore the clock entirely.
    pub fn elapse(&mut self, elapsed_ms: u32) -> u32 {
        if !self.playing {
            return 0;
        }
        let total = u64::from(self.since_tick_ms) + u64::from(elapsed_ms);
        let period = u64::from(AUTOPLAY_PERIOD_MS);
        let fired = total / period;
        for _ in 0..fired {
            self.ring.advance();
        }
        // Remainder is always below the period, so it fits back into u32.
        self.since_tick_ms = u32::try_from(total % period).unwrap_or(0);
        u32::try_from(fired).unwrap_or(u32::MAX)
    }
}
