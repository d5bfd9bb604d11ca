/// Flashcard navigator: a cursor over the vocabulary deck plus a flip flag.
/// Navigation is circular; there is no terminal state.
///
/// Advancing is split in two so the view can un-flip the card immediately
/// and step the index only after the flip-back delay: `begin_advance`
/// clears the flip state, then a one-shot timer calls `advance`.
pub struct FlashcardSession {
    index: usize,
    flipped: bool,
    deck_len: usize,
}

impl FlashcardSession {
    /// `deck_len` comes from a validated library and is always > 0.
    pub fn new(deck_len: usize) -> Self {
        Self {
            index: 0,
            flipped: false,
            deck_len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn begin_advance(&mut self) {
        self.flipped = false;
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.deck_len;
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.flipped = false;
    }
}
