use super::BotParams;
use truco_core::model::hand::Hand;
use truco_core::model::trump::TrumpSet;

/// Additive score of a hand: trumps, top ranks, faces and strong suits each
/// count per card, plus a bonus for holding two or more top ranks.
pub fn evaluate_hand_strength(hand: &Hand, trumps: &TrumpSet, params: &BotParams) -> u32 {
    let mut score = 0;
    let mut top_cards = 0;
    for &card in hand.iter() {
        if trumps.contains(card) {
            score += params.trump_weight;
        }
        if card.rank.is_top() {
            score += params.top_card_weight;
            top_cards += 1;
        } else if card.rank.is_face() {
            score += params.face_card_weight;
        }
        if card.suit.is_strong() {
            score += params.strong_suit_weight;
        }
    }
    if top_cards >= 2 {
        score += params.top_pair_bonus;
    }
    score
}
