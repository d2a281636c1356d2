use std::ops::{Index, IndexMut};
use std::time::Instant;

/// Screen index of the colon, between the hour and minute digit screens.
pub const COLON_SCREEN: u8 = 2;

/// The four independently animated digit positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::HourTens,
        Slot::HourOnes,
        Slot::MinuteTens,
        Slot::MinuteOnes,
    ];

    pub fn index(self) -> usize {
        match self {
            Slot::HourTens => 0,
            Slot::HourOnes => 1,
            Slot::MinuteTens => 2,
            Slot::MinuteOnes => 3,
        }
    }

    /// Screen the slot is rendered on. The colon sits on its own screen
    /// between the hour and minute pairs.
    pub fn screen(self) -> u8 {
        match self {
            Slot::HourTens => 0,
            Slot::HourOnes => 1,
            Slot::MinuteTens => 3,
            Slot::MinuteOnes => 4,
        }
    }
}

/// What a digit slot shows: a digit, or nothing (the blank phase at the
/// start of a roll).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Digit(u8),
    Blank,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('0'),
            Glyph::Blank => ' ',
        }
    }
}

/// Animation state of one digit slot.
#[derive(Debug, Clone)]
pub struct DigitSlot {
    pub target: u8,
    pub current: Glyph,
    pub animating: bool,
    pub started: Instant,
    /// Last applied animation step; -1 until the first step is due.
    pub step: i32,
    pub glitch_enabled: bool,
    pub glitch_active: bool,
    pub glitch_steps: u32,
}

impl DigitSlot {
    pub fn new(now: Instant) -> Self {
        DigitSlot {
            target: 0,
            current: Glyph::Digit(0),
            animating: false,
            started: now,
            step: -1,
            glitch_enabled: false,
            glitch_active: false,
            glitch_steps: 0,
        }
    }
}

/// Fixed map from `Slot` to its animation state.
#[derive(Debug, Clone)]
pub struct Slots([DigitSlot; 4]);

impl Slots {
    pub fn new(now: Instant) -> Self {
        Slots([
            DigitSlot::new(now),
            DigitSlot::new(now),
            DigitSlot::new(now),
            DigitSlot::new(now),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &DigitSlot> {
        self.0.iter()
    }
}

impl Index<Slot> for Slots {
    type Output = DigitSlot;

    fn index(&self, slot: Slot) -> &DigitSlot {
        &self.0[slot.index()]
    }
}

impl IndexMut<Slot> for Slots {
    fn index_mut(&mut self, slot: Slot) -> &mut DigitSlot {
        &mut self.0[slot.index()]
    }
}
