use serde::Deserialize;

use crate::model::intern::{InternRecord, InternshipField};

/// Request payload for intern creation. The record `id` is generated
/// server-side and `createdAt` is stamped at append time, so neither is
/// accepted from the caller. The completed-month counters are stored
/// verbatim; the server does not recompute them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateInternRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub father_name: String,
    pub mother_name: String,
    pub photo: String,
    pub linkedin_profile: String,
    pub internship_fields: Vec<InternshipField>,
    pub total_months_completed: u32,
    pub online_months_completed: u32,
    pub offline_months_completed: u32,
    pub certificate_issue_date: String,
}

impl CreateInternRequest {
    /// Builds the record to persist from this payload and a server-assigned id.
    pub fn into_record(self, id: String) -> InternRecord {
        InternRecord {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            father_name: self.father_name,
            mother_name: self.mother_name,
            photo: self.photo,
            linkedin_profile: self.linkedin_profile,
            internship_fields: self.internship_fields,
            total_months_completed: self.total_months_completed,
            online_months_completed: self.online_months_completed,
            offline_months_completed: self.offline_months_completed,
            certificate_issue_date: self.certificate_issue_date,
            created_at: String::new(),
        }
    }
}

/// Request payload for starting a certificate-generation job.
/// Both the intern and the uploaded template must already exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCertificateRequest {
    pub intern_id: String,
    pub template_id: String,
}
