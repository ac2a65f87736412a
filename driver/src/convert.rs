//! Mapping between the recording formats in `common` and the analyzer types.

use common::records::{
    HudRecord, KillFeedRecord, ObservationRecord, OverheatRecord, PhaseHint, StatsRecord,
};

pub fn phase(hint: PhaseHint) -> analysis::RoundPhase {
    match hint {
        PhaseHint::Pre => analysis::RoundPhase::Pre,
        PhaseHint::Mid => analysis::RoundPhase::Mid,
        PhaseHint::Post => analysis::RoundPhase::Post,
        PhaseHint::Unknown => analysis::RoundPhase::Unknown,
    }
}

fn kill_feed(lines: Vec<KillFeedRecord>) -> Vec<analysis::KillFeedLine> {
    lines
        .into_iter()
        .map(|line| analysis::KillFeedLine::new(line.killer, line.victim, line.victim_is_ally))
        .collect()
}

pub fn observation(record: ObservationRecord) -> analysis::Observation {
    analysis::Observation {
        captured_at: record.captured_at,
        self_dead: record.self_dead,
        ally_alive: record.ally_alive,
        enemy_alive: record.enemy_alive,
        round_timer_seconds: record.round_timer_seconds,
        round_phase_hint: phase(record.round_phase),
        round_ended: record.round_ended,
        kill_feed: kill_feed(record.kill_feed),
    }
}

pub fn hud(record: HudRecord) -> analysis::Observation {
    analysis::hud::HudReading {
        captured_at: record.captured_at,
        banner: record.banner,
        round_info: record.round_info,
        death_notice: record.death_notice,
        ally_icons: record.ally_icons,
        enemy_icons: record.enemy_icons,
        kill_feed: kill_feed(record.kill_feed),
    }
    .into_observation()
}

pub fn overheat_record(
    session: common::SessionId,
    logged_at: chrono::DateTime<chrono::Utc>,
    event: &analysis::OverheatEvent,
) -> OverheatRecord {
    OverheatRecord {
        session,
        logged_at,
        died_at: event.died_at,
        ally_alive_at_death: event.ally_alive_at_death,
        enemy_alive_at_death: event.enemy_alive_at_death,
        trade_window_closes_at: event.trade_window_closes_at,
    }
}

pub fn stats_record(session: common::SessionId, stats: &analysis::Stats) -> StatsRecord {
    StatsRecord {
        session,
        total_deaths: stats.total_deaths,
        deaths_with_advantage: stats.deaths_with_advantage,
        trades: stats.trades,
        overheats: stats.overheats,
        aborted: stats.aborted,
        concurrent_deaths: stats.concurrent_deaths,
        dropped_samples: stats.dropped_samples,
        degraded_samples: stats.degraded_samples,
    }
}
