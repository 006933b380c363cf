use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

use clap::ValueEnum;

use crate::color::Color;

/// Which circle the user is customizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// The static circle in the middle of the canvas
    #[default]
    Primary,
    /// The circle on the outer, faster orbit
    Fast,
    /// The circle on the inner, slower orbit
    Slow,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Primary, Target::Fast, Target::Slow];

    pub fn label(self) -> &'static str {
        match self {
            Target::Primary => "Circle #1",
            Target::Fast => "Circle #2",
            Target::Slow => "Circle #3",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CircleColor {
    #[default]
    Red,
    Green,
    Blue,
    Yellow,
    /// Hide the targeted circle
    None,
}

impl CircleColor {
    pub const ALL: [CircleColor; 5] = [
        CircleColor::Red,
        CircleColor::Green,
        CircleColor::Blue,
        CircleColor::Yellow,
        CircleColor::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CircleColor::Red => "Red",
            CircleColor::Green => "Green",
            CircleColor::Blue => "Blue",
            CircleColor::Yellow => "Yellow",
            CircleColor::None => "None",
        }
    }

    /// Maps the choice onto a paint color; `None` means the circle is not drawn
    pub fn resolve(self) -> Option<Color> {
        match self {
            CircleColor::Red => Some(Color::RED),
            CircleColor::Green => Some(Color::GREEN),
            CircleColor::Blue => Some(Color::BLUE),
            CircleColor::Yellow => Some(Color::YELLOW),
            CircleColor::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CircleSize {
    #[value(alias = "s")]
    Small,
    #[default]
    #[value(alias = "m")]
    Medium,
    #[value(alias = "l")]
    Large,
}

impl CircleSize {
    pub const ALL: [CircleSize; 3] = [CircleSize::Small, CircleSize::Medium, CircleSize::Large];

    pub fn label(self) -> &'static str {
        match self {
            CircleSize::Small => "S",
            CircleSize::Medium => "M",
            CircleSize::Large => "L",
        }
    }

    /// Radius in pixels for the given density scale
    pub fn radius(self, density: f64) -> f64 {
        let dp = match self {
            CircleSize::Small => 20.0,
            CircleSize::Medium => 30.0,
            CircleSize::Large => 45.0,
        };
        dp * density
    }
}

/// The user's current choice, always replaced as a whole
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub target: Target,
    pub color: CircleColor,
    pub size: CircleSize,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.target.label(),
            self.color.label(),
            self.size.label()
        )
    }
}

/// Owns the current selection and notifies subscribers when it changes
pub struct SelectionState {
    current: Selection,
    subscribers: Vec<Sender<Selection>>,
}

impl SelectionState {
    pub fn new(initial: Selection) -> Self {
        SelectionState {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> Selection {
        self.current
    }

    /// Returns a receiver that yields every future selection change
    pub fn subscribe(&mut self) -> Receiver<Selection> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Replaces the selection. Subscribers are only signalled when the value
    /// actually changed; returns whether it did.
    pub fn set_selection(&mut self, selection: Selection) -> bool {
        if selection == self.current {
            return false;
        }
        self.current = selection;
        log::info!("selection changed to {}", selection);
        // Dropped receivers are pruned here.
        self.subscribers.retain(|tx| tx.send(selection).is_ok());
        true
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState::new(Selection::default())
    }
}
