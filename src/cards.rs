use std::fmt;
use std::str::FromStr;

/// Card face values from Two (low) to Ace (high).
///
/// The discriminant is the rank used for hand strength (2..=14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Value {
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// Integer rank of this face value, 2 (Two) through 14 (Ace).
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        let v = match c {
            '2' => Value::Two,
            '3' => Value::Three,
            '4' => Value::Four,
            '5' => Value::Five,
            '6' => Value::Six,
            '7' => Value::Seven,
            '8' => Value::Eight,
            '9' => Value::Nine,
            'T' => Value::Ten,
            'J' => Value::Jack,
            'Q' => Value::Queen,
            'K' => Value::King,
            'A' => Value::Ace,
            _ => return None,
        };
        Some(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Value {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Value::from_char(c).ok_or(CardParseError::Value(c))
    }
}

/// Four suits; order has no hand-strength meaning but is fixed: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(CardParseError::Suit(c)),
        }
    }
}

/// A malformed card token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("card token must be exactly two characters: '{0}'")]
    Length(String),
    #[error("invalid card value: '{0}'")]
    Value(char),
    #[error("invalid card suit: '{0}'")]
    Suit(char),
}

/// A playing card: face value + suit.
///
/// ```
/// use poker_hands::cards::{Card, Suit, Value};
///
/// let card = Card::new(Value::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "AS");
/// assert_eq!(card.rank(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    value: Value,
    suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a two-character token such as `"TD"`. Uppercase only.
    pub fn parse(token: &str) -> Result<Self, CardParseError> {
        let mut chars = token.chars();
        let (Some(v), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardParseError::Length(token.to_string()));
        };
        Ok(Card::new(Value::try_from(v)?, Suit::try_from(s)?))
    }

    pub const fn value(self) -> Value {
        self.value
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Integer rank of the card's face value (2..=14).
    pub const fn rank(self) -> u8 {
        self.value.rank()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

/// Parse whitespace-separated card tokens.
///
/// ```
/// use poker_hands::cards::{parse_cards, Card, Suit, Value};
///
/// let cards = parse_cards("AS KD  TC").unwrap();
/// assert_eq!(cards[0], Card::new(Value::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Value::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Value::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input.split_whitespace().map(Card::parse).collect()
}
