#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AdvantageState {
    Advantage,
    Even,
    Disadvantage,
}

/// Man-advantage of the observer's team for the given alive counts.
pub fn classify(ally_alive: u8, enemy_alive: u8) -> AdvantageState {
    match ally_alive.cmp(&enemy_alive) {
        std::cmp::Ordering::Greater => AdvantageState::Advantage,
        std::cmp::Ordering::Equal => AdvantageState::Even,
        std::cmp::Ordering::Less => AdvantageState::Disadvantage,
    }
}
