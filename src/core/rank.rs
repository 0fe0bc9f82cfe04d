use std::cmp::Ordering;

use super::card::{Card, Value};

/// The class of a hand with no tie break detail.
///
/// The discriminant is the category number, higher is better.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Category {
    /// No matches.
    HighCard = 0,
    /// Two cards of one value.
    OnePair = 1,
    /// Two different pairs.
    TwoPair = 2,
    /// Three cards of one value.
    ThreeOfAKind = 3,
    /// Five values in a row.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// A set and a pair.
    FullHouse = 6,
    /// Four cards of one value.
    FourOfAKind = 7,
    /// A straight all in one suit.
    StraightFlush = 8,
    /// Only reachable once jokers are substituted.
    FiveOfAKind = 9,
}

impl Category {
    /// The category number, 0 for high card up to 9 for five of a kind.
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// The grouped values that lead a pair based hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub enum Lead {
    /// The value of a set or of a single pair.
    Single(Value),
    /// Both pairs, higher one first.
    Double(Value, Value),
}

/// The tie break payload of a hand, tagged by the shape it has.
///
/// There is intentionally no ordering here. Two keys can only be
/// compared once their categories are known to match, which is what
/// `HandRank`'s `Ord` does.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub enum RankKey {
    /// Straight, straight flush and five of a kind: the highest value.
    Top(Value),
    /// Four of a kind and full house: the big group then the small one.
    Major(Value, Value),
    /// Flush and high card: every value, highest first.
    Kickers([Value; 5]),
    /// Sets and pairs: the grouped values then every value, highest first.
    Grouped(Lead, [Value; 5]),
}

/// All the different possible hand ranks.
/// Each variant carries the tie break payload that its category needs.
///
/// Ordering is written by hand:
///
/// - Different categories compare by category alone.
/// - Straights, straight flushes and five of a kind compare the top value.
/// - Four of a kind and full house compare the big group, then the small group.
/// - Flushes and high cards compare only the highest value.
/// - Sets, two pair and one pair compare the grouped values, then only the
///   highest value of the whole hand.
///
/// The last two rules look at a single kicker. Two flushes with the same
/// top card are equal even when the cards below differ. Equality follows the
/// same rules, so use [`HandRank::key`] when the full payload matters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub enum HandRank {
    /// The lowest rank.
    /// No matches
    HighCard([Value; 5]),
    /// One Card matches another.
    OnePair(Value, [Value; 5]),
    /// Two different pair of matching cards.
    TwoPair([Value; 2], [Value; 5]),
    /// Three of the same value.
    ThreeOfAKind(Value, [Value; 5]),
    /// Five cards in a sequence
    Straight(Value),
    /// Five cards of the same suit
    Flush([Value; 5]),
    /// Three of one value and two of another value
    FullHouse(Value, Value),
    /// Four of the same value.
    FourOfAKind(Value, Value),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(Value),
    /// Five of the same value.
    FiveOfAKind(Value),
}

impl HandRank {
    /// The category without any tie break detail.
    pub fn category(&self) -> Category {
        match self {
            HandRank::HighCard(_) => Category::HighCard,
            HandRank::OnePair(..) => Category::OnePair,
            HandRank::TwoPair(..) => Category::TwoPair,
            HandRank::ThreeOfAKind(..) => Category::ThreeOfAKind,
            HandRank::Straight(_) => Category::Straight,
            HandRank::Flush(_) => Category::Flush,
            HandRank::FullHouse(..) => Category::FullHouse,
            HandRank::FourOfAKind(..) => Category::FourOfAKind,
            HandRank::StraightFlush(_) => Category::StraightFlush,
            HandRank::FiveOfAKind(_) => Category::FiveOfAKind,
        }
    }

    /// The tie break payload with its shape made explicit.
    pub fn key(&self) -> RankKey {
        match *self {
            HandRank::Straight(top) | HandRank::StraightFlush(top) | HandRank::FiveOfAKind(top) => {
                RankKey::Top(top)
            }
            HandRank::FullHouse(major, minor) | HandRank::FourOfAKind(major, minor) => {
                RankKey::Major(major, minor)
            }
            HandRank::HighCard(values) | HandRank::Flush(values) => RankKey::Kickers(values),
            HandRank::OnePair(lead, values) | HandRank::ThreeOfAKind(lead, values) => {
                RankKey::Grouped(Lead::Single(lead), values)
            }
            HandRank::TwoPair([high, low], values) => {
                RankKey::Grouped(Lead::Double(high, low), values)
            }
        }
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        use HandRank::*;
        match (self, other) {
            (Straight(a), Straight(b))
            | (StraightFlush(a), StraightFlush(b))
            | (FiveOfAKind(a), FiveOfAKind(b)) => a.cmp(b),
            (FullHouse(a, x), FullHouse(b, y)) | (FourOfAKind(a, x), FourOfAKind(b, y)) => {
                a.cmp(b).then(x.cmp(y))
            }
            (HighCard(a), HighCard(b)) | (Flush(a), Flush(b)) => a[0].cmp(&b[0]),
            (OnePair(a, x), OnePair(b, y)) | (ThreeOfAKind(a, x), ThreeOfAKind(b, y)) => {
                a.cmp(b).then(x[0].cmp(&y[0]))
            }
            (TwoPair(a, x), TwoPair(b, y)) => a.cmp(b).then(x[0].cmp(&y[0])),
            _ => self.category().cmp(&other.category()),
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

/// The first value that shows up exactly `n` times.
///
/// `values` must be sorted so equal values sit next to each other.
fn kind(values: &[Value], n: usize) -> Option<Value> {
    values
        .chunk_by(|a, b| a == b)
        .find(|group| group.len() == n)
        .map(|group| group[0])
}

/// Both pair values, higher first, if there are two pairs.
fn two_pair(values: &[Value]) -> Option<[Value; 2]> {
    let mut pairs = values
        .chunk_by(|a, b| a == b)
        .filter(|group| group.len() == 2)
        .map(|group| group[0]);
    match (pairs.next(), pairs.next()) {
        (Some(high), Some(low)) => Some([high, low]),
        _ => None,
    }
}

/// Five values that step down by exactly one. There is no wheel,
/// `A 5 4 3 2` is not a straight.
fn is_straight(values: &[Value; 5]) -> bool {
    values.windows(2).all(|w| w[0] as u8 == w[1] as u8 + 1)
}

fn is_flush(cards: &[Card; 5]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

/// Rank a five card hand.
///
/// The categories are tried from best to worst and the first one
/// that matches wins. High card always matches so this never fails.
///
/// # Examples
/// ```
/// use wild_poker::core::{parse_cards, rank_five, Category, HandRank, Value};
///
/// let cards: [_; 5] = parse_cards("TD TC TH 8C 8S").unwrap().try_into().unwrap();
/// let rank = rank_five(&cards);
/// assert_eq!(Category::FullHouse, rank.category());
/// assert_eq!(HandRank::FullHouse(Value::Ten, Value::Eight), rank);
/// ```
pub fn rank_five(cards: &[Card; 5]) -> HandRank {
    let mut values = cards.map(|c| c.value);
    values.sort_unstable_by(|a, b| b.cmp(a));

    let straight = is_straight(&values);
    let flush = is_flush(cards);

    if let Some(v) = kind(&values, 5) {
        HandRank::FiveOfAKind(v)
    } else if straight && flush {
        HandRank::StraightFlush(values[0])
    } else if let (Some(quads), Some(kicker)) = (kind(&values, 4), kind(&values, 1)) {
        HandRank::FourOfAKind(quads, kicker)
    } else if let (Some(set), Some(pair)) = (kind(&values, 3), kind(&values, 2)) {
        HandRank::FullHouse(set, pair)
    } else if flush {
        HandRank::Flush(values)
    } else if straight {
        HandRank::Straight(values[0])
    } else if let Some(set) = kind(&values, 3) {
        HandRank::ThreeOfAKind(set, values)
    } else if let Some(pairs) = two_pair(&values) {
        HandRank::TwoPair(pairs, values)
    } else if let Some(pair) = kind(&values, 2) {
        HandRank::OnePair(pair, values)
    } else {
        HandRank::HighCard(values)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use super::*;
    use crate::core::card::{parse_cards, Suit};

    use Value::*;

    fn rank_str(s: &str) -> HandRank {
        let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
        rank_five(&cards)
    }

    #[test]
    fn test_high_card_hand() {
        let rank = rank_str("AD 8H 9C TC 5C");
        assert_eq!(RankKey::Kickers([Ace, Ten, Nine, Eight, Five]), rank.key());
        assert_eq!(Category::HighCard, rank.category());
    }

    #[test]
    fn test_one_pair() {
        let rank = rank_str("AD AC 9D 8C TS");
        assert_eq!(
            RankKey::Grouped(Lead::Single(Ace), [Ace, Ace, Ten, Nine, Eight]),
            rank.key()
        );
    }

    #[test]
    fn test_two_pair() {
        let rank = rank_str("9D AD AC 9C TS");
        assert_eq!(
            RankKey::Grouped(Lead::Double(Ace, Nine), [Ace, Ace, Ten, Nine, Nine]),
            rank.key()
        );
        assert_eq!(Category::TwoPair, rank.category());
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = rank_str("2C 2S 2H 5S 6D");
        assert_eq!(
            RankKey::Grouped(Lead::Single(Two), [Six, Five, Two, Two, Two]),
            rank.key()
        );
    }

    #[test]
    fn test_straight() {
        assert_eq!(HandRank::Straight(Six), rank_str("2C 3S 4H 5S 6D"));
        assert_eq!(HandRank::Straight(Ace), rank_str("TC JS QH KS AD"));
    }

    #[test]
    fn test_no_wheel() {
        // A 2 3 4 5 doesn't step down by one so it's only a high card.
        let rank = rank_str("AD 2C 3S 4H 5S");
        assert_eq!(Category::HighCard, rank.category());
        // Same with a single suit, it's a flush but not a straight flush.
        let rank = rank_str("AD 2D 3D 4D 5D");
        assert_eq!(Category::Flush, rank.category());
    }

    #[test]
    fn test_flush() {
        let rank = rank_str("AD 8D 9D TD 5D");
        assert_eq!(RankKey::Kickers([Ace, Ten, Nine, Eight, Five]), rank.key());
        assert_eq!(Category::Flush, rank.category());
    }

    #[test]
    fn test_full_house() {
        assert_eq!(HandRank::FullHouse(Nine, Ace), rank_str("AD AC 9D 9C 9S"));
        assert_eq!(RankKey::Major(Nine, Ace), rank_str("AD AC 9D 9C 9S").key());
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(RankKey::Major(Ace, Ten), rank_str("AD AC AS AH TS").key());
        assert_eq!(RankKey::Major(Seven, Jack), rank_str("JD 7C 7D 7S 7H").key());
    }

    #[test]
    fn test_straight_flush() {
        let rank = rank_str("6C 7C 8C 9C TC");
        assert_eq!(HandRank::StraightFlush(Ten), rank);
        assert_eq!(RankKey::Top(Ten), rank.key());
    }

    #[test]
    fn test_five_of_a_kind() {
        // Can't come from a real deck, but the classifier doesn't care.
        let cards = [Card::new(King, Suit::Spade); 5];
        let rank = rank_five(&cards);
        assert_eq!(Category::FiveOfAKind, rank.category());
        assert_eq!(RankKey::Top(King), rank.key());
    }

    #[test]
    fn test_category_values() {
        assert_eq!(0, Category::HighCard.value());
        assert_eq!(5, Category::Flush.value());
        assert_eq!(9, Category::FiveOfAKind.value());
        assert!(Category::Straight < Category::Flush);
        assert!(Category::StraightFlush < Category::FiveOfAKind);
    }

    #[test]
    fn test_cmp_across_categories() {
        // Payloads don't leak into cross category comparison.
        assert!(
            HandRank::HighCard([Ace, King, Queen, Jack, Nine])
                < HandRank::OnePair(Two, [Seven, Five, Four, Three, Two])
        );
        assert!(HandRank::Straight(Ace) < HandRank::Flush([Seven, Five, Four, Three, Two]));
        assert!(HandRank::FourOfAKind(Ace, King) < HandRank::StraightFlush(Six));
        assert!(HandRank::StraightFlush(Ace) < HandRank::FiveOfAKind(Two));
    }

    #[test]
    fn test_cmp_top() {
        assert!(HandRank::Straight(Ten) > HandRank::Straight(Nine));
        assert_eq!(HandRank::StraightFlush(Jack), HandRank::StraightFlush(Jack));
    }

    #[test]
    fn test_cmp_major_minor() {
        assert!(HandRank::FullHouse(Ten, Eight) > HandRank::FullHouse(Ten, Seven));
        assert!(HandRank::FullHouse(Ten, Two) > HandRank::FullHouse(Nine, Ace));
        assert!(HandRank::FourOfAKind(Ten, Eight) > HandRank::FourOfAKind(Ten, Five));
    }

    #[test]
    fn test_cmp_kickers_only_top_card() {
        let a = rank_str("AD 9D 7D 5D 3D");
        let b = rank_str("AH KH QH JH 9H");
        // Only the top card breaks ties between flushes.
        assert_eq!(a, b);
        assert_ne!(a.key(), b.key());
        assert!(rank_str("KD 9D 7D 5D 3D") < b);

        let a = rank_str("AD 9C 7D 5S 3D");
        let b = rank_str("AH KC QH JS 9H");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cmp_grouped() {
        // Higher pair wins before anything else.
        assert!(rank_str("AS AH 2D 3C 4S") > rank_str("KS KH QD JC 9S"));
        // Same pair, the top card of the whole hand decides.
        assert!(rank_str("8S 8H KD 3C 4S") > rank_str("8D 8C QD JC 9S"));
        // Same pair and same top card are equal even with different kickers.
        assert_eq!(rank_str("8S 8H KD 3C 2S"), rank_str("8D 8C KC JC 9S"));
        // The top card can be the pair itself.
        assert_eq!(rank_str("AS AH KD 3C 2S"), rank_str("AD AC 4C 3D 2D"));
    }

    #[test]
    fn test_cmp_two_pair() {
        assert!(rank_str("KS KH 2D 2C 3S") > rank_str("QS QH JD JC AS"));
        assert!(rank_str("KS KH 5D 5C 3S") > rank_str("KD KC 4D 4C AS"));
        assert!(rank_str("AS AH 5D 5C 3S") == rank_str("AD AC 5H 5S KS"));
    }

    #[test]
    fn test_cmp_sets() {
        assert!(rank_str("9S 9H 9D 2C 3S") > rank_str("8S 8H 8D AC KS"));
    }

    #[test]
    fn test_every_hand_has_one_category() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut deck: Vec<Card> = Card::deck().collect();
        let mut seen = [0usize; 10];
        for _ in 0..20_000 {
            deck.shuffle(&mut rng);
            let cards: [Card; 5] = deck[..5].try_into().unwrap();
            let rank = rank_five(&cards);
            let category = rank.category();
            seen[category.value() as usize] += 1;

            // Payload shape always matches the category.
            match (category, rank.key()) {
                (
                    Category::Straight | Category::StraightFlush | Category::FiveOfAKind,
                    RankKey::Top(_),
                ) => {}
                (Category::FullHouse | Category::FourOfAKind, RankKey::Major(..)) => {}
                (Category::HighCard | Category::Flush, RankKey::Kickers(_)) => {}
                (
                    Category::OnePair | Category::ThreeOfAKind,
                    RankKey::Grouped(Lead::Single(_), _),
                ) => {}
                (Category::TwoPair, RankKey::Grouped(Lead::Double(..), _)) => {}
                (c, k) => panic!("category {c:?} with key {k:?}"),
            }
            // Ranking is a pure function of the cards.
            let mut shuffled = cards;
            shuffled.reverse();
            assert_eq!(rank.key(), rank_five(&shuffled).key());
        }
        // A real deck never makes five of a kind.
        assert_eq!(0, seen[Category::FiveOfAKind.value() as usize]);
        assert!(seen[Category::HighCard.value() as usize] > 0);
        assert!(seen[Category::OnePair.value() as usize] > 0);
    }
}
