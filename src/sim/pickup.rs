//! Potion pickups

use super::collision::player_touches_potion;
use super::state::{GameEvent, GameState};

/// Heal the player for every potion they stand on and remove those potions.
///
/// Healing is not capped at `max_health`.
pub fn update(state: &mut GameState) {
    let mut i = 0;
    while i < state.entities.potions.len() {
        let potion = &state.entities.potions[i];
        if !player_touches_potion(state.entities.player.pos, potion.pos) {
            i += 1;
            continue;
        }

        // The next potion shifts into slot `i`, so don't advance
        let potion = state.entities.remove_potion(i);
        let player = &mut state.entities.player;
        player.health = player.health.saturating_add(potion.heal);
        log::debug!("Picked up potion! Health: {}", player.health);
        let health = player.health;
        state.emit(GameEvent::PotionCollected {
            heal: potion.heal,
            health,
        });
    }
}
