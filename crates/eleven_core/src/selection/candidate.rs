use crate::models::{Card, Formation, Player, Position};
use crate::stats::{classify_versatility, PerformanceStats};

/// One (player, card, position) entry in the candidate universe, with its
/// derived statistics. Ephemeral: rebuilt from scratch on every selection
/// run and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub player: &'a Player,
    pub card: &'a Card,
    pub position: Position,
    pub stats: PerformanceStats,
}

/// Build the full candidate universe for one selection run.
///
/// Construction order is the deterministic tie-break for equal averages:
/// player-pool order, then card order within a player, then position order
/// within a card. Both assignment passes rely on a stable sort preserving
/// this order.
///
/// A card with no rated position at all still enters the universe, once per
/// distinct formation position, carrying empty-sample stats — a brand-new
/// card must stay selectable. A position whose history exists but is empty
/// emits nothing (equivalent to an absent position).
pub fn build_candidates<'a>(players: &'a [Player], formation: &Formation) -> Vec<Candidate<'a>> {
    let fallback_positions = formation.distinct_positions();
    let mut candidates = Vec::new();

    for player in players {
        for card in &player.cards {
            if card.is_unrated() {
                let stats = PerformanceStats::from_history(&[], false);
                for &position in &fallback_positions {
                    candidates.push(Candidate { player, card, position, stats });
                }
                continue;
            }

            let versatile = classify_versatility(card);
            for (position, history) in card.rated_positions() {
                candidates.push(Candidate {
                    player,
                    card,
                    position,
                    stats: PerformanceStats::from_history(history, versatile),
                });
            }
        }
    }

    candidates
}

/// Candidates for one position, best average first. `sort_by` is stable, so
/// equal averages keep construction order.
pub fn ranked_for_position<'a, 'b>(
    candidates: &'b [Candidate<'a>],
    position: Position,
) -> Vec<&'b Candidate<'a>> {
    let mut ranked: Vec<&Candidate> =
        candidates.iter().filter(|c| c.position == position).collect();
    ranked.sort_by(|a, b| b.stats.average.total_cmp(&a.stats.average));
    ranked
}
