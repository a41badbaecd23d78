//! Two-pass greedy team assignment.
//!
//! Pass 1 fills starters slot by slot, pass 2 fills substitutes over the
//! same slots, and finalization backfills placeholders. The whole run is a
//! pure function of (player pool, formation, discard set): no I/O, no input
//! mutation, no global state, and total over degenerate inputs — an empty
//! pool or a fully discarded one just yields more placeholders.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{AssignedPlayer, Formation, FormationSlot, IdealTeamSlot, Player, SlotRole};

use super::candidate::{build_candidates, ranked_for_position, Candidate};
use super::tiers::SUBSTITUTE_TIERS;

/// Assign one starter and one substitute to every formation slot.
///
/// Player uniqueness is tracked at player granularity: once any of a
/// player's cards is assigned, starter or substitute, that player is out of
/// contention for every other slot in the same run. Cards in
/// `discarded_card_ids` are never selected.
///
/// The output mirrors the formation's slot order and length (11 in
/// production; shorter or longer formations are passed through untouched,
/// validation being the CRUD layer's job).
pub fn generate_ideal_team(
    players: &[Player],
    formation: &Formation,
    discarded_card_ids: &HashSet<String>,
) -> Vec<IdealTeamSlot> {
    let candidates = build_candidates(players, formation);
    debug!(
        candidates = candidates.len(),
        slots = formation.slots.len(),
        discarded = discarded_card_ids.len(),
        "built candidate universe"
    );

    let slot_count = formation.slots.len();
    let mut used: HashSet<&str> = HashSet::new();
    let mut starters: Vec<Option<AssignedPlayer>> = (0..slot_count).map(|_| None).collect();
    let mut substitutes: Vec<Option<AssignedPlayer>> = (0..slot_count).map(|_| None).collect();

    // Pass 1: starters. The winner is claimed globally before the next slot
    // is considered.
    for (index, slot) in formation.slots.iter().enumerate() {
        let ranked = ranked_for_position(&candidates, slot.position);
        if let Some(candidate) = pick_starter(&ranked, slot, &used, discarded_card_ids) {
            debug!(
                slot = index,
                position = slot.position.code(),
                player = %candidate.player.id,
                card = %candidate.card.id,
                "starter assigned"
            );
            used.insert(candidate.player.id.as_str());
            starters[index] = Some(assign(&candidate));
        }
    }

    // Pass 2: substitutes, over the same slots, after all starters are
    // settled. Lists are recomputed from the full universe; pass-1 winners
    // drop out through the used-player check, not by removal.
    for (index, slot) in formation.slots.iter().enumerate() {
        let ranked = ranked_for_position(&candidates, slot.position);
        if let Some(candidate) = pick_substitute(&ranked, slot, &used, discarded_card_ids) {
            debug!(
                slot = index,
                position = slot.position.code(),
                player = %candidate.player.id,
                card = %candidate.card.id,
                "substitute assigned"
            );
            used.insert(candidate.player.id.as_str());
            substitutes[index] = Some(assign(&candidate));
        }
    }

    // Finalization: every cell left empty becomes a deterministic
    // placeholder keyed by slot index and role.
    formation
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| IdealTeamSlot {
            position: slot.position,
            starter: starters[index].take().unwrap_or_else(|| {
                AssignedPlayer::placeholder(index, SlotRole::Starter, slot.position)
            }),
            substitute: substitutes[index].take().unwrap_or_else(|| {
                AssignedPlayer::placeholder(index, SlotRole::Substitute, slot.position)
            }),
        })
        .collect()
}

fn eligible(
    candidate: &Candidate,
    used: &HashSet<&str>,
    discarded_card_ids: &HashSet<String>,
) -> bool {
    !used.contains(candidate.player.id.as_str()) && !discarded_card_ids.contains(&candidate.card.id)
}

/// Starter pick: best eligible average, style-matching candidates first when
/// the slot declares a preference.
fn pick_starter<'a>(
    ranked: &[&Candidate<'a>],
    slot: &FormationSlot,
    used: &HashSet<&str>,
    discarded_card_ids: &HashSet<String>,
) -> Option<Candidate<'a>> {
    if !slot.styles.is_empty() {
        if let Some(candidate) = ranked
            .iter()
            .find(|c| slot.prefers(c.card.style) && eligible(c, used, discarded_card_ids))
        {
            return Some(**candidate);
        }
    }

    ranked.iter().find(|c| eligible(c, used, discarded_card_ids)).map(|c| **c)
}

/// Substitute pick: tier scan over the style-filtered list first (when the
/// slot has a preference), then the same scan unfiltered before giving up.
fn pick_substitute<'a>(
    ranked: &[&Candidate<'a>],
    slot: &FormationSlot,
    used: &HashSet<&str>,
    discarded_card_ids: &HashSet<String>,
) -> Option<Candidate<'a>> {
    if !slot.styles.is_empty() {
        let styled: Vec<&Candidate<'a>> =
            ranked.iter().filter(|c| slot.prefers(c.card.style)).copied().collect();
        if let Some(candidate) = scan_tiers(&styled, used, discarded_card_ids) {
            return Some(candidate);
        }
    }

    scan_tiers(ranked, used, discarded_card_ids)
}

/// Walk the tier table in order; within a tier the list is already sorted by
/// average descending.
fn scan_tiers<'a>(
    ranked: &[&Candidate<'a>],
    used: &HashSet<&str>,
    discarded_card_ids: &HashSet<String>,
) -> Option<Candidate<'a>> {
    for (tier, admits) in SUBSTITUTE_TIERS {
        for candidate in ranked {
            if admits(&candidate.stats) && eligible(candidate, used, discarded_card_ids) {
                debug!(tier, player = %candidate.player.id, "substitute tier match");
                return Some(**candidate);
            }
        }
    }
    None
}

fn assign(candidate: &Candidate) -> AssignedPlayer {
    AssignedPlayer {
        player_id: candidate.player.id.clone(),
        player_name: candidate.player.name.clone(),
        card_id: candidate.card.id.clone(),
        card_name: candidate.card.name.clone(),
        style: candidate.card.style,
        position: candidate.position,
        stats: candidate.stats,
        placeholder: false,
    }
}
