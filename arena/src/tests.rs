#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use pokeduel_dex::{CatalogError, CreatureRecord, CsvCatalog};

    use crate::{
        Arena, ArenaConfig, ArenaError, BattleStatus, BattleStatusResponse, ResolveError,
        StatusLabel,
    };

    const POKEMON_CSV: &str = "\
name,type1,type2,attack,against_grass,against_fire,against_water,against_poison,pokedex_number
Bulbasaur,grass,poison,49,0.5,2,0.5,0.5,1
Charmander,fire,,52,0.5,0.5,2,1,4
Squirtle,water,,48,2,0.5,0.5,1,7
Pikachu,electric,,55,1,1,1,1,25
";

    fn arena() -> Arena {
        let catalog = CsvCatalog::from_reader(POKEMON_CSV.as_bytes()).unwrap();
        Arena::new(Arc::new(catalog))
    }

    async fn wait_for_terminal(arena: &Arena, battle_id: &str) -> BattleStatusResponse {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let status = arena.battle_status(battle_id).unwrap();
                if status.status != StatusLabel::InProgress {
                    return status;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("battle did not finish")
    }

    #[tokio::test]
    async fn test_start_battle_registers_before_returning() {
        let arena = arena();
        let started = arena.start_battle("Bulbasaur", "Charmander").unwrap();

        // No await between submission and the first poll.
        let status = arena.battle_status(&started.battle_id.to_string());
        assert!(status.is_ok());
    }

    #[tokio::test]
    async fn test_battle_completes_with_valid_result() {
        let arena = arena();
        let started = arena.start_battle("Bulbasaur", "Charmander").unwrap();

        let status = wait_for_terminal(&arena, &started.battle_id.to_string()).await;
        assert_eq!(status.status, StatusLabel::Completed);

        let result = status.result.unwrap();
        assert!(["Bulbasaur", "Charmander", "draw"].contains(&result.winner_name.as_str()));
        assert!(result.won_by_margin >= 0.0);
    }

    #[tokio::test]
    async fn test_first_poll_sees_pending_while_lock_is_held() {
        let arena = arena();
        let guard = arena.executor.lock.lock().await;

        let started = arena.start_battle("Squirtle", "Charmander").unwrap();
        let id = started.battle_id.to_string();
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let status = arena.battle_status(&id).unwrap();
        assert_eq!(status.status, StatusLabel::InProgress);
        assert!(status.result.is_none());

        drop(guard);
        let status = wait_for_terminal(&arena, &id).await;
        // Charmander -> Squirtle: 26 - (12.5 + 25) = -11.5
        // Squirtle -> Charmander: 24 - (50 + 25) = -51
        let result = status.result.unwrap();
        assert_eq!(result.winner_name, "Charmander");
        assert!((result.won_by_margin - 39.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_typo_behaves_like_correct_name() {
        let arena = arena();
        let typo = arena.start_battle("Charmandr", "Squirtle").unwrap();
        let exact = arena.start_battle("Charmander", "squirtle").unwrap();

        let typo = wait_for_terminal(&arena, &typo.battle_id.to_string()).await;
        let exact = wait_for_terminal(&arena, &exact.battle_id.to_string()).await;
        assert_eq!(typo, exact);

        let battle = arena
            .battle(&arena.start_battle("Charmandr", "Squirtle").unwrap().battle_id)
            .unwrap();
        assert_eq!(battle.creatures, ("Charmander".to_string(), "Squirtle".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_name_fails_at_submission() {
        let arena = arena();

        let err = arena.start_battle("Bulbasaur", "Mewtwo").unwrap_err();
        assert!(matches!(
            err.resolve_error(),
            Some(ResolveError::NotFound { input, .. }) if input == "Mewtwo"
        ));

        let err = arena.start_battle("Charmadr", "Bulbasaur").unwrap_err();
        assert!(matches!(
            err.resolve_error(),
            Some(ResolveError::AmbiguousName { suggestions, .. }) if suggestions == &["charmander"]
        ));

        assert!(arena.registry.is_empty());
    }

    #[tokio::test]
    async fn test_back_to_back_battles_are_independent() {
        let arena = arena();
        let first = arena.start_battle("Pikachu", "Squirtle").unwrap();
        let second = arena.start_battle("Pikachu", "Squirtle").unwrap();
        assert_ne!(first.battle_id, second.battle_id);

        let first_status = wait_for_terminal(&arena, &first.battle_id.to_string()).await;
        let second_status = wait_for_terminal(&arena, &second.battle_id.to_string()).await;
        assert_eq!(first_status, second_status);
        assert_eq!(arena.registry.len(), 2);

        let first_battle = arena.battle(&first.battle_id).unwrap();
        let second_battle = arena.battle(&second.battle_id).unwrap();
        assert_eq!(first_battle.id, first.battle_id);
        assert_eq!(second_battle.id, second.battle_id);
    }

    #[tokio::test]
    async fn test_mirror_match_is_draw() {
        let arena = arena();
        let started = arena.start_battle("Pikachu", "pikachu").unwrap();

        let status = wait_for_terminal(&arena, &started.battle_id.to_string()).await;
        let result = status.result.unwrap();
        assert_eq!(result.winner_name, "draw");
        assert_eq!(result.won_by_margin, 0.0);

        let battle = arena.battle(&started.battle_id).unwrap();
        assert!(matches!(battle.status, BattleStatus::Completed(ref o) if o.winner.is_draw()));
    }

    #[tokio::test]
    async fn test_unknown_battle_id() {
        let arena = arena();
        let unknown = uuid::Uuid::new_v4().to_string();

        assert!(matches!(
            arena.battle_status(&unknown),
            Err(ArenaError::BattleNotFound(id)) if id == unknown
        ));
        assert!(matches!(
            arena.battle_status("not-a-battle"),
            Err(ArenaError::BattleNotFound(_))
        ));
    }

    #[test]
    fn test_start_battle_outside_runtime() {
        let arena = arena();
        assert!(matches!(
            arena.start_battle("Bulbasaur", "Squirtle"),
            Err(ArenaError::NoRuntime)
        ));
        assert!(arena.registry.is_empty());
    }

    #[test]
    fn test_bad_name_reported_before_runtime_check() {
        let arena = arena();
        let err = arena.start_battle("Bulbasaur", "Mewtwo").unwrap_err();
        assert!(matches!(
            err.resolve_error(),
            Some(ResolveError::NotFound { input, .. }) if input == "Mewtwo"
        ));
        assert!(arena.registry.is_empty());
    }

    /// "bat" is one edit from `first`, which is listed ahead of "Bat"
    fn cave_arena(first: &str) -> Arena {
        let catalog = pokeduel_dex::Catalog::new(vec![
            CreatureRecord::new(first, "normal").with_attack(200.0),
            CreatureRecord::new("Bat", "normal").with_attack(0.0),
            CreatureRecord::new("Zubat", "normal").with_attack(100.0),
        ])
        .unwrap();
        Arena::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_battle_uses_creature_resolved_at_submission() {
        let arena = cave_arena("Cat");

        // "bag" is two edits from "cat" and one from "bat".
        let started = arena.start_battle("bag", "Zubat").unwrap();
        let battle = arena.battle(&started.battle_id).unwrap();
        assert_eq!(battle.creatures, ("Bat".to_string(), "Zubat".to_string()));

        // Bat -> Zubat: 0 - 50, Zubat -> Bat: 50 - 50
        let status = wait_for_terminal(&arena, &started.battle_id.to_string()).await;
        let result = status.result.unwrap();
        assert_eq!(result.winner_name, "Zubat");
        assert_eq!(result.won_by_margin, 50.0);
    }

    #[tokio::test]
    async fn test_tie_break_winner_matches_registered_creature() {
        let arena = cave_arena("Pat");

        // "bat" is one edit from "pat", which comes first in the catalog.
        let started = arena.start_battle("bat", "Zubat").unwrap();
        let battle = arena.battle(&started.battle_id).unwrap();
        assert_eq!(battle.creatures, ("Pat".to_string(), "Zubat".to_string()));

        // Pat -> Zubat: 100 - 50, Zubat -> Pat: 50 - 50
        let status = wait_for_terminal(&arena, &started.battle_id.to_string()).await;
        let result = status.result.unwrap();
        assert_eq!(result.winner_name, battle.creatures.0);
        assert_eq!(result.won_by_margin, 50.0);
    }

    #[test]
    fn test_creatures_listing() {
        let catalog = pokeduel_dex::Catalog::new(vec![
            CreatureRecord::new("Bulbasaur", "grass"),
            CreatureRecord::new("Ivysaur", "grass"),
            CreatureRecord::new("Venusaur", "grass"),
        ])
        .unwrap();
        let arena = Arena::with_page_size(Arc::new(catalog), 2);

        let page = arena.creatures(1, None);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.items[1].name, "Ivysaur");

        let page = arena.creatures(2, None);
        assert_eq!(page.items.len(), 1);

        let page = arena.creatures(1, Some(10));
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_from_config_missing_catalog() {
        let config = ArenaConfig {
            catalog_path: "/definitely/not/here/pokemon.csv".into(),
            ..ArenaConfig::default()
        };
        let err = Arena::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to load catalog"));
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::Io(_))
        ));
    }
}
