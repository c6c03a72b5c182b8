//! App-visit and adhkar-completion streaks.

use tracing::{debug, info};

use super::keys::{ADHKAR_STREAK_STATE, LAST_VISIT_DATE, STREAK_COUNT};
use super::streak::parse_stored_date;
use super::{degrade, EngagementStore};
use crate::models::{StreakChange, StreakState, VisitOutcome};
use crate::traits::{date_key, StoreError};

impl EngagementStore {
    /// Log today's visit against the app streak.
    pub async fn record_visit(&self) -> VisitOutcome {
        match self.try_record_visit().await {
            Ok(outcome) => outcome,
            Err(e) => degrade("record_visit", STREAK_COUNT, e, VisitOutcome::degraded()),
        }
    }

    async fn try_record_visit(&self) -> Result<VisitOutcome, StoreError> {
        let today = self.clock.today();
        let mut state = self.visit_state().await?;
        let change = state.advance(today);

        if change != StreakChange::Unchanged {
            self.set(STREAK_COUNT, &state.streak.to_string()).await?;
            self.set(LAST_VISIT_DATE, &date_key(today)).await?;
            info!(streak = state.streak, ?change, "Visit streak updated");
        } else {
            debug!(streak = state.streak, "Visit already recorded today");
        }

        Ok(VisitOutcome {
            streak: state.streak,
            change,
        })
    }

    /// Current visit streak without logging a visit.
    pub async fn current_streak(&self) -> u32 {
        match self.visit_state().await {
            Ok(state) => state.streak,
            Err(e) => degrade("current_streak", STREAK_COUNT, e, 0),
        }
    }

    async fn visit_state(&self) -> Result<StreakState, StoreError> {
        let streak = self
            .get(STREAK_COUNT)
            .await?
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);
        let last_log_date = self
            .get(LAST_VISIT_DATE)
            .await?
            .filter(|raw| parse_stored_date(raw).is_some());
        Ok(StreakState {
            streak,
            last_log_date,
        })
    }

    /// Log a fully completed adhkar session against the adhkar streak.
    pub async fn record_adhkar_completion(&self) -> VisitOutcome {
        let result = async {
            let today = self.clock.today();
            let mut state: StreakState = self.read_json_or_default(ADHKAR_STREAK_STATE).await?;
            let change = state.advance(today);
            if change != StreakChange::Unchanged {
                self.write_json(ADHKAR_STREAK_STATE, &state).await?;
                info!(streak = state.streak, ?change, "Adhkar streak updated");
            }
            Ok::<_, StoreError>(VisitOutcome {
                streak: state.streak,
                change,
            })
        }
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(e) => degrade(
                "record_adhkar_completion",
                ADHKAR_STREAK_STATE,
                e,
                VisitOutcome::degraded(),
            ),
        }
    }

    /// Current adhkar streak.
    pub async fn adhkar_streak(&self) -> u32 {
        match self.read_json_or_default::<StreakState>(ADHKAR_STREAK_STATE).await {
            Ok(state) => state.streak,
            Err(e) => degrade("adhkar_streak", ADHKAR_STREAK_STATE, e, 0),
        }
    }
}
