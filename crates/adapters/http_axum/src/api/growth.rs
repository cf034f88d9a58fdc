//! Growth lab: reverse-funnel planning.

use axum::Json;

use opsdash_domain::growth::{self, FunnelInput, FunnelPlan};

use super::Reply;
use crate::error::ApiError;

/// `POST /api/growth/plan`: work back from a revenue goal to the number of
/// leads, calls and clients needed.
pub async fn plan(Json(input): Json<FunnelInput>) -> Result<Reply<FunnelPlan>, ApiError> {
    let plan = growth::plan(&input)?;
    Ok(Reply::Ok(Json(plan)))
}
