use portal_core::RepoStatTotals;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RepoTotalsResponse {
    #[serde(flatten)]
    pub totals: RepoStatTotals,
    pub cached: bool,
}
