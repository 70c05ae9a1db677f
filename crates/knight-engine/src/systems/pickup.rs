use crate::api::types::GameEvent;
use crate::components::coin::Coin;
use crate::components::player::Player;
use crate::systems::emit;

/// Collect every uncollected coin touching the player.
/// Returns true when this pickup completed the level.
pub fn collect_coins(
    player: &Player,
    coins: &mut [Coin],
    coin_radius: f32,
    collected: &mut u32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let body = player.rect();
    let total = coins.len() as u32;
    let mut picked_any = false;

    for (index, coin) in coins.iter_mut().enumerate() {
        if !coin.bounds(coin_radius).overlaps(&body) || !coin.collect() {
            continue;
        }
        *collected = (*collected + 1).min(total);
        picked_any = true;
        emit(events, GameEvent::CoinCollected { index, collected: *collected, total });
    }

    picked_any && *collected == total
}
