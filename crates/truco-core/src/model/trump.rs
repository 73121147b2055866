use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// Every trump scores above this; non-trumps top out at 10.
const TRUMP_BASE: u8 = 15;

/// The manilhas for one deal: the four cards one rank above the turn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrumpSet {
    turn_card: Card,
    rank: Rank,
}

impl TrumpSet {
    pub const fn from_turn_card(turn_card: Card) -> Self {
        Self {
            turn_card,
            rank: turn_card.rank.next(),
        }
    }

    pub const fn turn_card(&self) -> Card {
        self.turn_card
    }

    pub const fn rank(&self) -> Rank {
        self.rank
    }

    pub fn contains(&self, card: Card) -> bool {
        card.rank == self.rank
    }

    /// The four trumps, strongest first.
    pub fn cards(&self) -> [Card; 4] {
        Suit::BY_STRENGTH.map(|suit| Card::new(self.rank, suit))
    }

    /// Total order used to compare plays: trumps map to 16..=19 by suit,
    /// everything else to its ladder strength 1..=10.
    pub fn rank_value(&self, card: Card) -> u8 {
        if self.contains(card) {
            TRUMP_BASE + card.suit.trump_strength()
        } else {
            card.rank.strength()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrumpSet;
    use crate::model::card::Card;
    use crate::model::deck::Deck;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn turn_card_four_makes_fives_trump() {
        let trumps = TrumpSet::from_turn_card(Card::new(Rank::Four, Suit::Diamonds));
        assert_eq!(trumps.rank(), Rank::Five);
        assert_eq!(
            trumps.cards(),
            [
                Card::new(Rank::Five, Suit::Clubs),
                Card::new(Rank::Five, Suit::Hearts),
                Card::new(Rank::Five, Suit::Spades),
                Card::new(Rank::Five, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn turn_card_three_wraps_to_fours() {
        let trumps = TrumpSet::from_turn_card(Card::new(Rank::Three, Suit::Clubs));
        assert_eq!(trumps.rank(), Rank::Four);
    }

    #[test]
    fn every_trump_outranks_every_other_card() {
        let deck = Deck::standard();
        for turn in deck.cards().iter().copied() {
            let trumps = TrumpSet::from_turn_card(turn);
            assert_eq!(trumps.rank(), turn.rank.next());
            let lowest_trump = trumps
                .cards()
                .iter()
                .map(|card| trumps.rank_value(*card))
                .min()
                .unwrap();
            let highest_plain = deck
                .cards()
                .iter()
                .filter(|card| !trumps.contains(**card))
                .map(|card| trumps.rank_value(*card))
                .max()
                .unwrap();
            assert!(lowest_trump > highest_plain);
        }
    }

    #[test]
    fn trumps_are_ordered_by_suit_strength() {
        let trumps = TrumpSet::from_turn_card(Card::new(Rank::Ace, Suit::Spades));
        let values: Vec<u8> = trumps.cards().iter().map(|c| trumps.rank_value(*c)).collect();
        assert_eq!(values, vec![19, 18, 17, 16]);
    }

    #[test]
    fn plain_cards_use_ladder_strength() {
        let trumps = TrumpSet::from_turn_card(Card::new(Rank::Four, Suit::Hearts));
        assert_eq!(trumps.rank_value(Card::new(Rank::Three, Suit::Diamonds)), 10);
        assert_eq!(trumps.rank_value(Card::new(Rank::Ace, Suit::Clubs)), 8);
        assert_eq!(trumps.rank_value(Card::new(Rank::Four, Suit::Clubs)), 1);
    }
}
