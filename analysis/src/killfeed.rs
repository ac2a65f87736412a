/// One line of the kill feed as read by recognition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KillFeedLine {
    pub killer: String,
    pub victim: String,
    /// The victim is on the observer's team.
    pub victim_is_ally: bool,
}

impl KillFeedLine {
    pub fn new(killer: impl Into<String>, victim: impl Into<String>, victim_is_ally: bool) -> Self {
        Self {
            killer: killer.into(),
            victim: victim.into(),
            victim_is_ally,
        }
    }
}

/// Alive counts `(ally, enemy)` right before `player` died.
///
/// `before` are the counts of the last sample where the player was still alive,
/// `after` the counts of the sample that shows them dead. Every death between
/// the two samples is one of the newest lines of `feed`, so those lines are
/// replayed oldest first until the player's own line is reached. Returns `None`
/// when the feed does not contain the player's death among the new lines.
pub fn counts_at_death(
    before: (u8, u8),
    after: (u8, u8),
    feed: &[KillFeedLine],
    player: &str,
) -> Option<(u8, u8)> {
    let new_deaths = usize::from(before.0.saturating_sub(after.0))
        + usize::from(before.1.saturating_sub(after.1));
    if new_deaths == 0 {
        return None;
    }

    let recent = &feed[feed.len().saturating_sub(new_deaths)..];

    let (mut ally, mut enemy) = before;
    for line in recent {
        if line.victim.eq_ignore_ascii_case(player) {
            tracing::trace!(ally, enemy, killer = %line.killer, "Reconstructed counts at death");
            return Some((ally, enemy));
        }

        if line.victim_is_ally {
            ally = ally.saturating_sub(1);
        } else {
            enemy = enemy.saturating_sub(1);
        }
    }

    None
}
