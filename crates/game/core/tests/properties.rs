use farm_core::{
    Action, ActionContext, BuildingName, Bumpkin, Chicken, Coordinates, Decimal, FeatureFlags,
    GameEngine, GameState, ItemName, PlacedBuilding, RemoveBuildingAction, SeedBoughtAction,
    Timestamp, TreasureSoldAction, WearableName,
};
use proptest::prelude::*;

const SEEDS: &[ItemName] = &[
    ItemName::SunflowerSeed,
    ItemName::PotatoSeed,
    ItemName::OnionSeed,
    ItemName::BarleySeed,
    ItemName::LunaraSeed,
    ItemName::SunpetalSeed,
    ItemName::Sunflower,
];

const SELLABLES: &[ItemName] = &[
    ItemName::Pearl,
    ItemName::Pipi,
    ItemName::BlackMagic,
    ItemName::SunflowerSeed,
];

const BUILDINGS: &[BuildingName] = &[
    BuildingName::WaterWell,
    BuildingName::HenHouse,
    BuildingName::Kitchen,
    BuildingName::CropMachine,
];

/// Whole, fractional, zero and negative amounts.
fn amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (-3i64..60).prop_map(Decimal::from),
        (-500i64..5_000).prop_map(|cents| Decimal::new(cents, 2)),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (prop::sample::select(SEEDS), amount())
            .prop_map(|(item, amount)| SeedBoughtAction::new(item, amount).into()),
        (prop::sample::select(SELLABLES), amount())
            .prop_map(|(item, amount)| TreasureSoldAction::new(item, amount).into()),
        (prop::sample::select(BUILDINGS), 0usize..4).prop_map(|(name, index)| {
            RemoveBuildingAction::new(name, format!("{name}-{index}")).into()
        }),
    ]
}

fn farm() -> impl Strategy<Value = GameState> {
    (
        0i64..5_000,
        0i64..20,
        0u32..3,
        0usize..3,
        0usize..30,
        prop::option::of(0i64..3_000),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(coins, pearls, spots, houses, chickens, experience, shield, brewing)| {
                let mut state = GameState::new();
                if let Some(experience) = experience {
                    let mut bumpkin = Bumpkin::new(Decimal::from(experience));
                    if shield {
                        bumpkin.equip(WearableName::SunflowerShield);
                    }
                    state.bumpkin = Some(bumpkin);
                }
                state.coins = Decimal::new(coins, 1);
                state.inventory.set(ItemName::Pearl, Decimal::from(pearls));
                state.inventory.set(ItemName::Pipi, Decimal::new(pearls * 7, 1));
                state.inventory.set(ItemName::CropPlot, Decimal::from(spots));
                state.inventory.set(ItemName::FlowerBed, Decimal::from(spots));
                for seed in SEEDS {
                    state.stock.set(*seed, Decimal::from(pearls * 2));
                }
                for name in BUILDINGS {
                    for index in 0..houses {
                        state.buildings.push(
                            *name,
                            PlacedBuilding::placed(
                                format!("{name}-{index}"),
                                Coordinates::ORIGIN,
                                Timestamp(index as u64 * 400),
                            ),
                        );
                    }
                }
                for index in 0..chickens {
                    let chicken = if brewing && index % 4 == 3 {
                        Chicken::fed(Timestamp(1))
                    } else {
                        Chicken::idle()
                    };
                    state.chickens.insert(format!("chicken-{index}"), chicken);
                }
                state
            },
        )
}

/// Farms that sometimes carry a reused building id, so an action can pass
/// its own phases and still be rejected once `apply` has changed the draft.
fn tangled_farm() -> impl Strategy<Value = GameState> {
    (farm(), any::<bool>()).prop_map(|(mut state, tangled)| {
        if tangled {
            for placed_at in [Timestamp(10), Timestamp(20)] {
                state.buildings.push(
                    BuildingName::Bakery,
                    PlacedBuilding::placed("twin", Coordinates::ORIGIN, placed_at),
                );
            }
        }
        state
    })
}

proptest! {
    #[test]
    fn execution_is_deterministic(
        state in farm(),
        action in action(),
        now in 0u64..1_000,
        landscaping in any::<bool>(),
    ) {
        let features = if landscaping { FeatureFlags::LANDSCAPING } else { FeatureFlags::empty() };
        let ctx = ActionContext::new(Timestamp(now)).with_features(features);
        let copy = state.clone();

        let outcome = GameEngine::new(&state).execute(&action, &ctx);
        let again = GameEngine::new(&copy).execute(&action, &ctx);

        prop_assert_eq!(outcome, again);
    }

    #[test]
    fn rejected_actions_carry_the_input_forward(
        state in tangled_farm(),
        action in action(),
        now in 0u64..1_000,
    ) {
        let ctx = ActionContext::new(Timestamp(now));
        let engine = GameEngine::new(&state);
        let resolution = engine.resolve(&action, &ctx);

        match resolution.rejection {
            Some(error) => {
                prop_assert_eq!(&resolution.state, &state);
                prop_assert_eq!(engine.execute(&action, &ctx), Err(error));
            }
            None => {
                prop_assert!(state.check_invariants().is_ok());
                prop_assert_eq!(engine.execute(&action, &ctx), Ok(resolution.state));
            }
        }
    }

    #[test]
    fn committed_states_stay_non_negative(
        state in farm(),
        actions in prop::collection::vec(action(), 1..8),
    ) {
        let mut current = state;
        for (step, action) in actions.iter().enumerate() {
            let ctx = ActionContext::new(Timestamp(500 + step as u64));
            if let Ok(next) = GameEngine::new(&current).execute(action, &ctx) {
                prop_assert!(next.coins >= Decimal::ZERO);
                prop_assert!(next.inventory.iter().all(|(_, amount)| amount >= Decimal::ZERO));
                prop_assert!(next.stock.iter().all(|(_, amount)| amount >= Decimal::ZERO));
                current = next;
            }
        }
    }

    #[test]
    fn eviction_never_drops_brewing_chickens(state in farm(), index in 0usize..3, now in 0u64..2_000) {
        let action = Action::from(RemoveBuildingAction::new(
            BuildingName::HenHouse,
            format!("{}-{index}", BuildingName::HenHouse),
        ));
        if let Ok(next) = GameEngine::new(&state).execute(&action, &ActionContext::new(Timestamp(now))) {
            for (id, chicken) in state.chickens.iter() {
                if chicken.is_brewing() {
                    prop_assert!(next.chickens.contains(id));
                }
            }
            let kept: Vec<_> = next.chickens.ids().collect();
            let prefix: Vec<_> = state.chickens.ids().take(kept.len()).collect();
            prop_assert_eq!(kept, prefix);
        }
    }
}
