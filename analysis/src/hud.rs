//! Interpretation of recognized HUD text.
//!
//! Recognition hands over raw strings (banner words, the round info strip, the
//! death notice) and agent icon names. This module turns them into an
//! [`Observation`]. Anything that cannot be read becomes an absent field, the
//! analyzer's carry-forward decides what happens next.

use crate::{HudParseError, KillFeedLine, Observation, RoundPhase};

/// Banner words and the phase they announce.
pub static BANNER_PHASES: phf::Map<&'static str, RoundPhase> = phf::phf_map! {
    "buy phase" => RoundPhase::Pre,
    "lost" => RoundPhase::Post,
    "won" => RoundPhase::Post,
    "clutch" => RoundPhase::Post,
    "ace" => RoundPhase::Post,
};

/// Shown in the kill notice once the observer is dead.
pub const DEATH_TRIGGER: &str = "KILLED BY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundInfo {
    pub current_round: u32,
    pub round_time_seconds: u16,
    pub score: (u32, u32),
}

/// Phase announced by the banner words, [`RoundPhase::Mid`] when none of them is a known banner.
pub fn phase_from_banner<S>(words: &[S]) -> RoundPhase
where
    S: AsRef<str>,
{
    words
        .iter()
        .find_map(|word| {
            BANNER_PHASES
                .get(word.as_ref().trim().to_lowercase().as_str())
                .copied()
        })
        .unwrap_or(RoundPhase::Mid)
}

/// Parses `M:SS` into seconds. OCR regularly reads the colon as a dot, so the
/// first dot is treated as a colon.
pub fn parse_round_timer(raw: &str) -> Result<u16, HudParseError> {
    let normalized = raw.trim().replacen('.', ":", 1);

    let (minutes, seconds) = normalized
        .split_once(':')
        .ok_or_else(|| HudParseError::MalformedTimer(raw.to_owned()))?;

    let minutes: u16 = minutes
        .trim()
        .parse()
        .map_err(|_| HudParseError::MalformedTimer(raw.to_owned()))?;
    let seconds: u16 = seconds
        .trim()
        .parse()
        .map_err(|_| HudParseError::MalformedTimer(raw.to_owned()))?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| HudParseError::MalformedTimer(raw.to_owned()))
}

/// Reads the round info strip: `[ally_score, timer, enemy_score]`.
pub fn parse_round_info<S>(readings: &[S]) -> Result<RoundInfo, HudParseError>
where
    S: AsRef<str>,
{
    let [ally, timer, enemy] = readings else {
        return Err(HudParseError::UnexpectedReadings(readings.len()));
    };

    let parse_score = |raw: &str| -> Result<u32, HudParseError> {
        raw.trim()
            .parse()
            .map_err(|_| HudParseError::MalformedScore(raw.to_owned()))
    };

    let ally_score = parse_score(ally.as_ref())?;
    let enemy_score = parse_score(enemy.as_ref())?;

    Ok(RoundInfo {
        current_round: ally_score + enemy_score + 1,
        round_time_seconds: parse_round_timer(timer.as_ref())?,
        score: (ally_score, enemy_score),
    })
}

pub fn is_player_dead<S>(texts: &[S]) -> bool
where
    S: AsRef<str>,
{
    texts.iter().any(|t| t.as_ref().contains(DEATH_TRIGGER))
}

/// Everything recognition read off a single frame.
///
/// `None` means the region was not read at all, an empty list means it was
/// read and nothing was found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HudReading {
    pub captured_at: f64,
    pub banner: Option<Vec<String>>,
    pub round_info: Option<Vec<String>>,
    pub death_notice: Option<Vec<String>>,
    /// Agent icons still shown for each side. Dead agents have no icon.
    pub ally_icons: Option<Vec<String>>,
    pub enemy_icons: Option<Vec<String>>,
    pub kill_feed: Vec<KillFeedLine>,
}

impl HudReading {
    pub fn into_observation(self) -> Observation {
        let round_phase_hint = match &self.banner {
            Some(words) => phase_from_banner(words),
            None => RoundPhase::Unknown,
        };
        let round_ended = round_phase_hint == RoundPhase::Post;

        let round_timer_seconds = match self.round_info.as_deref().map(parse_round_info) {
            Some(Ok(info)) => Some(info.round_time_seconds),
            Some(Err(e)) => {
                tracing::debug!(captured_at = self.captured_at, "Ignoring round info: {}", e);
                None
            }
            None => None,
        };

        Observation {
            captured_at: self.captured_at,
            self_dead: self.death_notice.as_deref().map(is_player_dead),
            ally_alive: self.ally_icons.as_ref().map(|icons| alive_count(icons)),
            enemy_alive: self.enemy_icons.as_ref().map(|icons| alive_count(icons)),
            round_timer_seconds,
            round_phase_hint,
            round_ended,
            kill_feed: self.kill_feed,
        }
    }
}

fn alive_count(icons: &[String]) -> u8 {
    u8::try_from(icons.len()).unwrap_or(u8::MAX)
}
