//! The registration-deadline record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One per-state voter registration deadline row.
///
/// Field declaration order here is the JSON key order on the wire. The
/// frontend data grid identifies rows by the `state` key and expects every
/// row to carry all seven keys, so nullable fields serialize as explicit
/// `null` rather than being omitted. Database columns use the quoted
/// PascalCase names the table was provisioned with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct DeadlineRecord {
    pub state: String,
    pub deadline_in_person: Option<String>,
    pub deadline_by_mail: Option<String>,
    pub deadline_online: Option<String>,
    pub election_day_registration: Option<String>,
    pub online_registration_link: Option<String>,
    pub description: Option<String>,
}
