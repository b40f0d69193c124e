//! Results export
//!
//! A reduced view of a session meant for download: the estimated features and
//! the mode they were estimated with. It is a projection, not a snapshot, and
//! cannot be used to resume a session.

use super::entities::CompletedFeature;
use super::store::Session;
use crate::consensus::GameMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsExport {
    pub completed_features: Vec<CompletedFeature>,
    pub game_mode: GameMode,
}

impl ResultsExport {
    pub fn from_session(session: &Session) -> Self {
        Self {
            completed_features: session.completed_features().to_vec(),
            game_mode: session.game_mode(),
        }
    }

    /// Sum of the numeric estimates; special cards count as zero
    pub fn total_points(&self) -> u32 {
        self.completed_features
            .iter()
            .filter_map(|f| f.estimated_difficulty.points())
            .sum()
    }
}

impl Session {
    pub fn export_results(&self) -> ResultsExport {
        ResultsExport::from_session(self)
    }
}
