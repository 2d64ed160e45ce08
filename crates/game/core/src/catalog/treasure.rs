use super::ItemName;
use crate::decimal::{Decimal, fixed};

/// Why an item can be sold for coins; decides which boosts apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum SellableKind {
    /// Beach bounty dug up from treasure holes.
    Treasure,
    /// Rare crops bought and sold at a fixed price.
    ExoticCrop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sellable {
    /// Coins paid per unit before boosts.
    pub sell_price: Decimal,
    pub kind: SellableKind,
}

/// Looks up the sale definition of `name`, or `None` if it cannot be sold.
pub fn sellable(name: ItemName) -> Option<Sellable> {
    use ItemName::*;

    let (sell_price, kind) = match name {
        PirateBounty => (fixed(3000, 0), SellableKind::Treasure),
        Pearl => (fixed(3000, 0), SellableKind::Treasure),
        Coral => (fixed(1500, 0), SellableKind::Treasure),
        ClamShell => (fixed(375, 0), SellableKind::Treasure),
        Pipi => (fixed(1875, 1), SellableKind::Treasure),
        Starfish => (fixed(1125, 1), SellableKind::Treasure),
        Seaweed => (fixed(75, 0), SellableKind::Treasure),
        SeaCucumber => (fixed(225, 1), SellableKind::Treasure),
        Crab => (fixed(15, 0), SellableKind::Treasure),
        WoodenCompass => (fixed(13125, 2), SellableKind::Treasure),
        IronCompass => (fixed(1875, 1), SellableKind::Treasure),
        EmeraldCompass => (fixed(200, 0), SellableKind::Treasure),
        OldBottle => (fixed(225, 1), SellableKind::Treasure),
        CamelBone => (fixed(200, 0), SellableKind::Treasure),
        CockleShell => (fixed(100, 0), SellableKind::Treasure),
        Hieroglyph => (fixed(250, 0), SellableKind::Treasure),
        Scarab => (fixed(200, 0), SellableKind::Treasure),

        BlackMagic => (fixed(32000, 0), SellableKind::ExoticCrop),
        GoldenHelios => (fixed(16000, 0), SellableKind::ExoticCrop),
        Chiogga => (fixed(8000, 0), SellableKind::ExoticCrop),
        PurpleCauliflower => (fixed(3200, 0), SellableKind::ExoticCrop),
        AdirondackPotato => (fixed(2400, 0), SellableKind::ExoticCrop),
        WartyGoblinPumpkin => (fixed(1600, 0), SellableKind::ExoticCrop),
        WhiteCarrot => (fixed(800, 0), SellableKind::ExoticCrop),

        _ => return None,
    };

    Some(Sellable { sell_price, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treasure_and_exotic_crops_are_sellable() {
        let pipi = sellable(ItemName::Pipi).unwrap();
        assert_eq!(pipi.sell_price, Decimal::new(1875, 1));
        assert_eq!(pipi.kind, SellableKind::Treasure);

        let magic = sellable(ItemName::BlackMagic).unwrap();
        assert_eq!(magic.kind, SellableKind::ExoticCrop);
    }

    #[test]
    fn seeds_and_crops_are_not_sellable_here() {
        assert!(sellable(ItemName::SunflowerSeed).is_none());
        assert!(sellable(ItemName::Sunflower).is_none());
        assert!(sellable(ItemName::Camel).is_none());
    }
}
