use crate::core::Color;

/// The cell alphabet. Anything else in a grid is drawn as a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Floor,
    Robot,
    Wall,
    BoxLeft,
    BoxRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Regular,
    Bold,
    Large,
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [
        Symbol::Floor,
        Symbol::Robot,
        Symbol::Wall,
        Symbol::BoxLeft,
        Symbol::BoxRight,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Floor),
            '@' => Some(Symbol::Robot),
            '#' => Some(Symbol::Wall),
            '[' => Some(Symbol::BoxLeft),
            ']' => Some(Symbol::BoxRight),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Symbol::Floor => '.',
            Symbol::Robot => '@',
            Symbol::Wall => '#',
            Symbol::BoxLeft => '[',
            Symbol::BoxRight => ']',
        }
    }

    pub fn appearance(self) -> (Color, TextStyle) {
        match self {
            Symbol::Floor => (Color::SLATE, TextStyle::Regular),
            Symbol::Robot => (Color::LIME, TextStyle::Large),
            Symbol::Wall => (Color::TOMATO, TextStyle::Regular),
            Symbol::BoxLeft | Symbol::BoxRight => (Color::GOLD, TextStyle::Bold),
        }
    }
}
