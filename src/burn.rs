use crate::msg::Uint128;

/// How the contract distributes a burned amount: half is sent to the burn
/// address, a tenth of the remainder to the developer and the rest to the
/// owner. Integer division rounds down at each step, so the owner receives any
/// dust.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BurnSplit {
    pub burn: Uint128,
    pub owner: Uint128,
    pub dev: Uint128,
}

impl BurnSplit {
    pub fn new(amount: impl Into<Uint128>) -> Self {
        let amount = amount.into();
        let burn = amount / Uint128::from(2u32);
        let remaining = amount - burn;
        let dev = remaining / Uint128::from(10u32);
        let owner = remaining - dev;
        Self { burn, owner, dev }
    }

    /// Sum of all three parts, always the amount the split was made from
    pub fn total(&self) -> Uint128 {
        self.burn + self.owner + self.dev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_amount() {
        let split = BurnSplit::new(1_000u32);
        assert_eq!(split.burn, Uint128::new(500));
        assert_eq!(split.dev, Uint128::new(50));
        assert_eq!(split.owner, Uint128::new(450));
        assert_eq!(split.total(), Uint128::new(1_000));
    }

    #[test]
    fn dust_goes_to_owner() {
        // 7 -> burn 3, remaining 4, dev 0, owner 4
        let split = BurnSplit::new(7u32);
        assert_eq!(
            split,
            BurnSplit { burn: Uint128::new(3), owner: Uint128::new(4), dev: Uint128::zero() }
        );

        let split = BurnSplit::new(1_000_001u32);
        assert_eq!(split.burn, Uint128::new(500_000));
        assert_eq!(split.dev, Uint128::new(50_000));
        assert_eq!(split.owner, Uint128::new(450_001));
    }

    #[test]
    fn never_loses_tokens() {
        for amount in [0u128, 1, 2, 19, 20, 21, 999, u128::MAX] {
            assert_eq!(BurnSplit::new(amount).total(), Uint128::new(amount));
        }
    }
}
