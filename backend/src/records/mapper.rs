//! Conversion between one 15-column worksheet row and an `InternRecord`.
//!
//! The row layout is positional and fixed; `HEADER` is the single source of
//! truth for column order and must not be reordered without migrating the
//! stored sheet. The `internshipFields` column holds a JSON-encoded array
//! and is the only cell that can fail to decode.

use common::model::intern::{InternRecord, InternshipField};

use crate::error::AppError;

/// Column titles of the `Interns` worksheet, in storage order.
pub const HEADER: [&str; 15] = [
    "ID",
    "Name",
    "Email",
    "Phone",
    "DateOfBirth",
    "FatherName",
    "MotherName",
    "Photo",
    "LinkedInProfile",
    "InternshipFields",
    "TotalMonthsCompleted",
    "OnlineMonthsCompleted",
    "OfflineMonthsCompleted",
    "CertificateIssueDate",
    "CreatedAt",
];

/// Decodes one data row. Missing cells default to the empty string (or 0
/// for the month counters); an empty `InternshipFields` cell decodes to an
/// empty list, but invalid JSON there is a `MalformedRecord` error and the
/// caller decides whether to skip or abort.
pub fn decode(row: &[String]) -> Result<InternRecord, AppError> {
    let text = |index: usize| row.get(index).cloned().unwrap_or_default();
    let number = |index: usize| {
        row.get(index)
            .and_then(|cell| cell.trim().parse::<u32>().ok())
            .unwrap_or(0)
    };

    let fields_cell = text(9);
    let internship_fields: Vec<InternshipField> = if fields_cell.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&fields_cell).map_err(|e| {
            AppError::MalformedRecord(format!("invalid InternshipFields cell: {e}"))
        })?
    };

    Ok(InternRecord {
        id: text(0),
        name: text(1),
        email: text(2),
        phone: text(3),
        date_of_birth: text(4),
        father_name: text(5),
        mother_name: text(6),
        photo: text(7),
        linkedin_profile: text(8),
        internship_fields,
        total_months_completed: number(10),
        online_months_completed: number(11),
        offline_months_completed: number(12),
        certificate_issue_date: text(13),
        created_at: text(14),
    })
}

/// Encodes a record into its 15-cell row, the exact inverse of `decode`.
pub fn encode(record: &InternRecord) -> Result<Vec<String>, AppError> {
    let internship_fields = serde_json::to_string(&record.internship_fields)
        .map_err(|e| AppError::MalformedRecord(format!("unencodable internship fields: {e}")))?;

    Ok(vec![
        record.id.clone(),
        record.name.clone(),
        record.email.clone(),
        record.phone.clone(),
        record.date_of_birth.clone(),
        record.father_name.clone(),
        record.mother_name.clone(),
        record.photo.clone(),
        record.linkedin_profile.clone(),
        internship_fields,
        record.total_months_completed.to_string(),
        record.online_months_completed.to_string(),
        record.offline_months_completed.to_string(),
        record.certificate_issue_date.clone(),
        record.created_at.clone(),
    ])
}

#[cfg(test)]
mod tests {
    use common::model::intern::Mode;

    use super::*;

    fn sample_record() -> InternRecord {
        InternRecord {
            id: "123456".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "+91 5550100".to_string(),
            date_of_birth: "2001-02-03".to_string(),
            father_name: "John Doe".to_string(),
            mother_name: "Janet Doe".to_string(),
            photo: "https://example.com/jane.jpg".to_string(),
            linkedin_profile: "https://linkedin.com/in/janedoe".to_string(),
            internship_fields: vec![InternshipField {
                field: "Backend".to_string(),
                start_date: "2024-01-01".to_string(),
                end_date: "2024-03-01".to_string(),
                mode: Mode::Online,
                project_videos: vec!["https://youtu.be/demo".to_string()],
            }],
            total_months_completed: 2,
            online_months_completed: 2,
            offline_months_completed: 0,
            certificate_issue_date: "2024-03-15".to_string(),
            created_at: "2024-03-15T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn encode_decode_round_trips() {
        let record = sample_record();
        let row = encode(&record).unwrap();
        assert_eq!(row.len(), HEADER.len());
        assert_eq!(decode(&row).unwrap(), record);
    }

    #[test]
    fn short_rows_default_missing_cells() {
        let row = vec!["123456".to_string(), "Jane Doe".to_string()];
        let record = decode(&row).unwrap();
        assert_eq!(record.id, "123456");
        assert_eq!(record.email, "");
        assert_eq!(record.total_months_completed, 0);
        assert!(record.internship_fields.is_empty());
    }

    #[test]
    fn empty_fields_cell_decodes_to_no_stints() {
        let mut row = encode(&sample_record()).unwrap();
        row[9] = String::new();
        assert!(decode(&row).unwrap().internship_fields.is_empty());
    }

    #[test]
    fn invalid_fields_json_is_a_malformed_record() {
        let mut row = encode(&sample_record()).unwrap();
        row[9] = "{not json".to_string();
        assert!(matches!(decode(&row), Err(AppError::MalformedRecord(_))));
    }

    #[test]
    fn unparseable_month_counters_decode_as_zero() {
        let mut row = encode(&sample_record()).unwrap();
        row[10] = "many".to_string();
        assert_eq!(decode(&row).unwrap().total_months_completed, 0);
    }
}
