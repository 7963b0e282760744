use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::report::{self, Model as ReportModel, Status};
use db::models::technician::{self, Model as TechnicianModel};
use db::models::user::{self, Role};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use std::collections::HashMap;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: usize,
    pub resolved: usize,
    pub pending: usize,
    pub in_progress: usize,
}

#[derive(Debug, Serialize, Default)]
pub struct AdminReportsResponse {
    pub reports: Vec<ReportModel>,
    pub stats: ReportStats,
}

/// GET /api/admin/reports
///
/// All reports, newest first, with status counts for the dashboard
/// header. Unpaginated: the dashboard renders the full list.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "reports": [ { "id": 1, "title": "Broken fan", "status": "pending", ... } ],
///     "stats": { "total": 3, "resolved": 1, "pending": 1, "inProgress": 1 }
///   },
///   "message": "Reports retrieved successfully"
/// }
/// ```
///
/// - `500 Internal Server Error`: generic "Server error"
pub async fn get_reports(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    let reports = match report::Entity::find()
        .order_by_desc(report::Column::CreatedAt)
        .all(db)
        .await
    {
        Ok(reports) => reports,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load reports");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AdminReportsResponse>::error("Server error")),
            );
        }
    };

    let stats = ReportStats {
        total: reports.len(),
        resolved: reports.iter().filter(|r| r.status == Status::Resolved).count(),
        pending: reports.iter().filter(|r| r.status == Status::Pending).count(),
        in_progress: reports
            .iter()
            .filter(|r| r.status == Status::InProgress)
            .count(),
    };

    tracing::debug!(
        total = stats.total,
        resolved = stats.resolved,
        pending = stats.pending,
        in_progress = stats.in_progress,
        "Admin report stats"
    );

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            AdminReportsResponse { reports, stats },
            "Reports retrieved successfully",
        )),
    )
}

/// One row of the admin technician dashboard.
///
/// Uniform shape whether or not a technician profile exists: users with
/// the technician role but no profile get a synthesized name (email
/// local-part) and the default designation.
#[derive(Debug, Serialize)]
pub struct TechnicianOverview {
    pub email: String,
    pub name: String,
    pub designation: String,
    /// Assigned reports still pending or in progress.
    pub workload: i64,
    /// Assigned reports already resolved.
    pub resolved: i64,
}

const DEFAULT_DESIGNATION: &str = "Technician";

/// GET /api/admin/technicians
///
/// Every user holding the technician role, merged with their profile
/// (when one exists) and their per-status report counts. Counts come
/// from a single grouped query over `reports` rather than per-technician
/// lookups.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "email": "tech@cmrcet.ac.in",
///       "name": "tech",
///       "designation": "Technician",
///       "workload": 2,
///       "resolved": 5
///     }
///   ],
///   "message": "Technicians retrieved successfully"
/// }
/// ```
///
/// - `500 Internal Server Error`: generic "Server error"
pub async fn get_technicians(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    let technician_users = match user::Entity::find()
        .filter(user::Column::Role.eq(Role::Technician))
        .all(db)
        .await
    {
        Ok(users) => users,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load technician users");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<TechnicianOverview>>::error("Server error")),
            );
        }
    };

    let profiles = match technician::Entity::find().all(db).await {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load technician profiles");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<TechnicianOverview>>::error("Server error")),
            );
        }
    };

    let counts = match assignment_counts(db).await {
        Ok(counts) => counts,
        Err(e) => {
            tracing::error!(error = %e, "Failed to count assigned reports");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<TechnicianOverview>>::error("Server error")),
            );
        }
    };

    let mut profiles_by_email: HashMap<String, TechnicianModel> = profiles
        .into_iter()
        .map(|profile| (profile.email.clone(), profile))
        .collect();

    let technicians: Vec<TechnicianOverview> = technician_users
        .into_iter()
        .map(|user| {
            let AssignmentCounts { workload, resolved } =
                counts.get(&user.email).copied().unwrap_or_default();

            match profiles_by_email.remove(&user.email) {
                Some(profile) => TechnicianOverview {
                    email: profile.email,
                    name: profile.name,
                    designation: profile.designation,
                    workload,
                    resolved,
                },
                None => {
                    let name = user
                        .email
                        .split('@')
                        .next()
                        .unwrap_or_default()
                        .to_owned();
                    TechnicianOverview {
                        email: user.email,
                        name,
                        designation: DEFAULT_DESIGNATION.to_owned(),
                        workload,
                        resolved,
                    }
                }
            }
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            technicians,
            "Technicians retrieved successfully",
        )),
    )
}

#[derive(Debug, Clone, Copy, Default)]
struct AssignmentCounts {
    workload: i64,
    resolved: i64,
}

/// Per-technician report counts from one query grouped by assignee and
/// status. Pending and in-progress both count toward workload.
async fn assignment_counts(
    db: &sea_orm::DatabaseConnection,
) -> Result<HashMap<String, AssignmentCounts>, sea_orm::DbErr> {
    #[derive(FromQueryResult)]
    struct Row {
        assigned_technician_id: String,
        status: Status,
        cnt: i64,
    }

    let rows: Vec<Row> = report::Entity::find()
        .select_only()
        .column(report::Column::AssignedTechnicianId)
        .column(report::Column::Status)
        .column_as(
            Expr::expr(Func::count(Expr::col(report::Column::Id))),
            "cnt",
        )
        .filter(report::Column::AssignedTechnicianId.is_not_null())
        .group_by(report::Column::AssignedTechnicianId)
        .group_by(report::Column::Status)
        .into_model::<Row>()
        .all(db)
        .await?;

    let mut counts: HashMap<String, AssignmentCounts> = HashMap::new();
    for row in rows {
        let entry = counts.entry(row.assigned_technician_id).or_default();
        match row.status {
            Status::Pending | Status::InProgress => entry.workload += row.cnt,
            Status::Resolved => entry.resolved += row.cnt,
        }
    }

    Ok(counts)
}
