//! Combat resolution tests.
//!
//! These tests drive combat through `DuelRules` and check:
//! - Unblocked damage to the defending player
//! - Simultaneous destruction of blocked pairs
//! - The post-combat reset of surviving participants

use mana_duel::cards::{CardInstance, CardKey, CardKind};
use mana_duel::core::{GameState, InstanceId, Phase, PlayerId};
use mana_duel::rules::{DuelRules, GameResult};

fn add_creature(state: &mut GameState, owner: PlayerId, attack: u32, defense: u32) -> InstanceId {
    let id = state.ids.alloc();
    let card = CardInstance::new(
        id,
        CardKey::new("creature"),
        format!("{attack}/{defense}"),
        CardKind::Creature {
            cost: 1,
            attack,
            defense,
        },
    );
    state.player_mut(owner).battlefield.insert(card);
    id
}

/// Declare `attackers`, then assign each (defender, attacker) block.
fn to_defense(
    rules: &DuelRules,
    state: &GameState,
    attackers: &[InstanceId],
    blocks: &[(InstanceId, InstanceId)],
) -> GameState {
    let mut state = rules.enter_attack_phase(state).unwrap();
    for &attacker in attackers {
        state = rules.declare_attacker(&state, attacker).unwrap();
    }
    state = rules.end_attack_phase(&state).unwrap();
    for &(defender, attacker) in blocks {
        state = rules.declare_defender(&state, defender, attacker).unwrap();
    }
    state
}

/// Test that an unblocked 2/2 deals 2 and both sides keep their creatures.
#[test]
fn test_unblocked_attacker() {
    let rules = DuelRules::default();
    let mut state = GameState::new(20);
    let bear = add_creature(&mut state, PlayerId::FIRST, 2, 2);
    let bystander = add_creature(&mut state, PlayerId::SECOND, 2, 2);

    let state = to_defense(&rules, &state, &[bear], &[]);
    let (state, report) = rules.resolve_combat(&state).unwrap();

    assert_eq!(report.player_damage, 2);
    assert_eq!(report.unblocked.as_slice(), &[bear]);
    assert_eq!(state.player(PlayerId::SECOND).life, 18);
    assert!(state.player(PlayerId::FIRST).battlefield.contains(bear));
    assert!(state.player(PlayerId::SECOND).battlefield.contains(bystander));
    // Attacker stays tapped through the opponent's turn
    assert!(state.player(PlayerId::FIRST).battlefield.get(bear).unwrap().tapped);
}

/// Test that a 3/1 blocked by a 1/1 trades with no player damage.
#[test]
fn test_trade() {
    let rules = DuelRules::default();
    let mut state = GameState::new(20);
    let raider = add_creature(&mut state, PlayerId::FIRST, 3, 1);
    let goblin = add_creature(&mut state, PlayerId::SECOND, 1, 1);

    let state = to_defense(&rules, &state, &[raider], &[(goblin, raider)]);
    let (state, report) = rules.resolve_combat(&state).unwrap();

    assert_eq!(report.destroyed_attackers.as_slice(), &[raider]);
    assert_eq!(report.destroyed_defenders.as_slice(), &[goblin]);
    assert_eq!(state.player(PlayerId::SECOND).life, 20);
    assert!(state.player(PlayerId::FIRST).battlefield.is_empty());
    assert!(state.player(PlayerId::SECOND).battlefield.is_empty());
}

/// Test that survivors are reset and tapped while base stats stay printed.
#[test]
fn test_survivors_reset() {
    let rules = DuelRules::default();
    let mut state = GameState::new(20);
    let giant = add_creature(&mut state, PlayerId::FIRST, 1, 5);
    let wall = add_creature(&mut state, PlayerId::SECOND, 1, 4);

    let state = to_defense(&rules, &state, &[giant], &[(wall, giant)]);
    let (state, report) = rules.resolve_combat(&state).unwrap();

    assert!(report.destroyed_attackers.is_empty());
    assert!(report.destroyed_defenders.is_empty());

    let attacker = state.player(PlayerId::FIRST).battlefield.get(giant).unwrap();
    assert!(!attacker.attacking);
    assert!(attacker.tapped);
    assert_eq!(attacker.kind.defense(), Some(5));

    // The wall's owner is now active and untapped it at turn start
    assert_eq!(state.active_player, PlayerId::SECOND);
    let blocker = state.player(PlayerId::SECOND).battlefield.get(wall).unwrap();
    assert_eq!(blocker.defending_target, None);
    assert!(!blocker.tapped);
    assert_eq!(blocker.kind.defense(), Some(4));
}

/// Test that ending Defense runs the full turn start for the defending player.
#[test]
fn test_end_defense_starts_next_turn() {
    let rules = DuelRules::default();
    let mut state = GameState::new(20);
    let scout = add_creature(&mut state, PlayerId::FIRST, 1, 1);
    let wall = add_creature(&mut state, PlayerId::SECOND, 0, 4);
    let resting = add_creature(&mut state, PlayerId::SECOND, 2, 2);

    let next_draw = state.ids.alloc();
    let defender = state.player_mut(PlayerId::SECOND);
    defender.total_mana = 3;
    defender.available_mana = 1;
    defender.played_resource_this_turn = true;
    defender.battlefield.get_mut(resting).unwrap().tapped = true;
    defender.deck.push_back(CardInstance::new(
        next_draw,
        CardKey::new("forest"),
        "Forest",
        CardKind::Mana { resource_value: 1 },
    ));

    let state = to_defense(&rules, &state, &[scout], &[(wall, scout)]);
    assert!(state.defending().battlefield.get(wall).unwrap().tapped);

    let state = rules.end_defense_phase(&state).unwrap();

    assert_eq!(state.active_player, PlayerId::SECOND);
    let player = state.active();
    assert_eq!(player.available_mana, 3);
    assert_eq!(player.total_mana, 3);
    assert!(!player.played_resource_this_turn);
    assert!(player.battlefield.iter().all(|c| !c.tapped));
    assert_eq!(player.battlefield.len(), 2);
    assert!(player.deck.is_empty());
    assert_eq!(player.hand.len(), 1);
    assert_eq!(player.hand[0].id, next_draw);
    // The attacker's side stays tapped until its own turn
    assert!(state.player(PlayerId::FIRST).battlefield.get(scout).unwrap().tapped);
}

/// Test that several blockers each take the attacker's full power.
#[test]
fn test_double_block() {
    let rules = DuelRules::default();
    let mut state = GameState::new(20);
    let ogre = add_creature(&mut state, PlayerId::FIRST, 3, 3);
    let left = add_creature(&mut state, PlayerId::SECOND, 1, 3);
    let right = add_creature(&mut state, PlayerId::SECOND, 2, 3);

    let state = to_defense(&rules, &state, &[ogre], &[(left, ogre), (right, ogre)]);
    let (state, report) = rules.resolve_combat(&state).unwrap();

    assert_eq!(report.destroyed_attackers.as_slice(), &[ogre]);
    assert_eq!(report.destroyed_defenders.len(), 2);
    assert!(state.player(PlayerId::SECOND).battlefield.is_empty());
}

/// Test that non-participants are untouched by combat.
#[test]
fn test_bystanders_untouched() {
    let rules = DuelRules::default();
    let mut state = GameState::new(20);
    let attacker = add_creature(&mut state, PlayerId::FIRST, 2, 2);
    let home = add_creature(&mut state, PlayerId::FIRST, 0, 1);

    let state = to_defense(&rules, &state, &[attacker], &[]);
    let (state, _) = rules.resolve_combat(&state).unwrap();

    let stayed = state.player(PlayerId::FIRST).battlefield.get(home).unwrap();
    assert!(!stayed.tapped);
}

/// Test that lethal damage is reported but does not stop the game.
#[test]
fn test_lethal_damage_reported() {
    let rules = DuelRules::default();
    let mut state = GameState::new(3);
    let dragon = add_creature(&mut state, PlayerId::FIRST, 5, 5);

    let state = to_defense(&rules, &state, &[dragon], &[]);
    let state = rules.end_defense_phase(&state).unwrap();

    assert_eq!(state.player(PlayerId::SECOND).life, -2);
    assert_eq!(state.outcome(), Some(GameResult::Winner(PlayerId::FIRST)));
    assert_eq!(state.phase, Phase::Main);
    assert!(rules.end_turn_directly(&state).is_ok());
}
