use serde::{Deserialize, Serialize};

/// Number of cards in a complete Zenji deck.
pub const DECK_SIZE: usize = 61;

/// Elemental alignment of a card. Zen-family cards carry no element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Earth,
    Fire,
    Water,
    Air,
    None,
}

/// Broad card family. `Magic` never appears in the printed deck but is a
/// valid kind for Higher Mind placement checks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Element,
    Avatar,
    Zen,
    Power,
    Magic,
}

/// Power tag printed on element cards valued 5 through 12, plus the avatar tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    Peek,
    Swap,
    Steal,
    Block,
    View,
    Predict,
    Disrupt,
    Transmute,
    Avatar,
}

/// A single Zenji card. Cards are immutable values; the engine moves them
/// between containers but never edits one after deck construction.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the deck ("1".."61" in construction order)
    pub id: String,
    /// Display name, e.g. "Earth 7" or "No-Zen King of Fire"
    pub name: String,
    pub kind: CardKind,
    pub element: Element,
    /// Monkey Mind face value; negative for Zen Kings and the Zenji card
    pub value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<Power>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Card {
    /// Elemental Point card: the scoring currency, element kind valued 1-4.
    pub fn is_ep(&self) -> bool {
        self.kind == CardKind::Element && (1..=4).contains(&self.value)
    }

    /// Zero Mind cards are the only zen cards worth exactly 0 and the only
    /// cards that cannot be knocked out.
    pub fn is_zero_mind(&self) -> bool {
        self.kind == CardKind::Zen && self.value == 0
    }

    /// Whether the card may be placed in a Higher Mind through the normal
    /// route (the knock-out penalty path bypasses this filter).
    pub fn higher_mind_eligible(&self) -> bool {
        self.is_ep() || matches!(self.kind, CardKind::Avatar | CardKind::Magic)
    }
}

pub fn all_elements() -> [Element; 4] {
    [Element::Earth, Element::Fire, Element::Water, Element::Air]
}

/// Power tag for an element card of the given value. Values outside 5..=12
/// carry no power.
pub fn power_for_value(value: i32) -> Option<Power> {
    match value {
        5 => Some(Power::Peek),
        6 => Some(Power::Swap),
        7 => Some(Power::Steal),
        8 => Some(Power::Block),
        9 => Some(Power::View),
        10 => Some(Power::Predict),
        11 => Some(Power::Disrupt),
        12 => Some(Power::Transmute),
        _ => None,
    }
}

fn element_name(element: Element) -> &'static str {
    match element {
        Element::Earth => "Earth",
        Element::Fire => "Fire",
        Element::Water => "Water",
        Element::Air => "Air",
        Element::None => "None",
    }
}

/// Builds the canonical 61-card deck in a fixed order: per element the value
/// 5-12 run, the four EP cards, then the avatar; followed by the kings, the
/// four Zero Mind cards and the single Zenji.
pub fn full_deck() -> Vec<Card> {
    let mut deck: Vec<Card> = Vec::with_capacity(DECK_SIZE);

    for element in all_elements() {
        for value in 5..=12 {
            deck.push(Card {
                id: (deck.len() + 1).to_string(),
                name: format!("{} {}", element_name(element), value),
                kind: CardKind::Element,
                element,
                value,
                power: power_for_value(value),
                description: None,
            });
        }
        for value in 1..=4 {
            deck.push(Card {
                id: (deck.len() + 1).to_string(),
                name: format!("{} EP {}", element_name(element), value),
                kind: CardKind::Element,
                element,
                value,
                power: None,
                description: Some(format!("Elemental Point card worth {value} points")),
            });
        }
        deck.push(Card {
            id: (deck.len() + 1).to_string(),
            name: format!("{} Avatar", element_name(element)),
            kind: CardKind::Avatar,
            element,
            value: 5,
            power: Some(Power::Avatar),
            description: Some(format!(
                "Worth 5 points in Monkey Mind, but all {} cards in your Monkey Mind \
                 become worth 0 points while this sits in your Higher Mind",
                element_name(element).to_lowercase()
            )),
        });
    }

    for element in [Element::Fire, Element::Water] {
        deck.push(Card {
            id: (deck.len() + 1).to_string(),
            name: format!("No-Zen King of {}", element_name(element)),
            kind: CardKind::Power,
            element,
            value: 13,
            power: None,
            description: Some("High value card that increases your Monkey Mind score".to_string()),
        });
    }

    for element in [Element::Earth, Element::Air] {
        deck.push(Card {
            id: (deck.len() + 1).to_string(),
            name: format!("Zen King of {}", element_name(element)),
            kind: CardKind::Zen,
            element,
            value: -1,
            power: None,
            description: Some("Reduces your Monkey Mind score by 1".to_string()),
        });
    }

    for _ in 0..4 {
        deck.push(Card {
            id: (deck.len() + 1).to_string(),
            name: "Zero Mind".to_string(),
            kind: CardKind::Zen,
            element: Element::None,
            value: 0,
            power: None,
            description: Some("Worth 0 points in Monkey Mind. Cannot be knocked out.".to_string()),
        });
    }

    deck.push(Card {
        id: (deck.len() + 1).to_string(),
        name: "Zenji".to_string(),
        kind: CardKind::Zen,
        element: Element::None,
        value: -2,
        power: None,
        description: Some("Reduces your Monkey Mind score by 2".to_string()),
    });

    deck
}
