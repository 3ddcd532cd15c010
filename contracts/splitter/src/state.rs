use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// One entry of the split table: `share` is counted in per mille.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Split {
    pub recipient: Addr,
    pub share: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct State {
    pub admin: Addr,
    pub native_coin: String,
    /// Replaced wholesale by `set_splits`, never edited in place.
    pub splits: Vec<Split>,
}

pub const STATE: Item<State> = Item::new("state");

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use cosmwasm_std::to_binary;

    #[test]
    fn stored_layout() {
        let split = Split {
            recipient: Addr::unchecked("donation_a"),
            share: 500,
        };
        assert_eq!(
            to_binary(&split).unwrap().as_slice(),
            br#"{"recipient":"donation_a","share":500}"#
        );

        let mut deps = mock_dependencies();
        let state = State {
            admin: Addr::unchecked("administrator"),
            native_coin: "utez".into(),
            splits: vec![split],
        };
        STATE.save(&mut deps.storage, &state).unwrap();
        assert_eq!(state, STATE.load(&deps.storage).unwrap());
    }
}
