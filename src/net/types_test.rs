use super::*;

fn sample_user_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "name": "Laura Pérez",
        "email": "laura@example.com",
        "email_verified_at": "2025-01-10T12:00:00Z",
        "created_at": "2024-11-02T08:30:00Z",
        "updated_at": "2025-01-10T12:00:00Z",
        "sucursal_id": 3,
        "sucursal": { "id": 3, "name": "Agencia Centro", "code": "AC" },
        "roles": ["analyst"],
        "permissions": ["credit-applications.view"]
    })
}

#[test]
fn auth_user_deserializes_branch_from_sucursal_fields() {
    let user: AuthUser = serde_json::from_value(sample_user_json()).expect("auth user");
    assert_eq!(user.branch_id, Some(3));
    let branch = user.branch.expect("branch record");
    assert_eq!(branch.name, "Agencia Centro");
    assert_eq!(branch.code.as_deref(), Some("AC"));
}

#[test]
fn auth_user_defaults_missing_lists_to_empty() {
    let user: AuthUser = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Ana",
        "email": "ana@example.com"
    }))
    .expect("minimal auth user");
    assert!(user.roles.is_empty());
    assert!(user.permissions.is_empty());
    assert!(user.branch.is_none());
}

#[test]
fn auth_user_serializes_branch_back_to_sucursal() {
    let user: AuthUser = serde_json::from_value(sample_user_json()).expect("auth user");
    let value = serde_json::to_value(&user).expect("serialize");
    assert_eq!(value["sucursal_id"], 3);
    assert_eq!(value["sucursal"]["code"], "AC");
}

#[test]
fn paginated_users_deserialize_with_meta() {
    let page: Paginated<User> = serde_json::from_value(serde_json::json!({
        "data": [{
            "id": 2,
            "name": "Carlos Ruiz",
            "email": "carlos@example.com",
            "created_at": "2025-02-01T00:00:00Z",
            "updated_at": "2025-02-01T00:00:00Z"
        }],
        "meta": { "current_page": 1, "last_page": 4, "per_page": 15, "total": 60 }
    }))
    .expect("paginated users");
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.meta.last_page, 4);
}

#[test]
fn default_applicant_seeds_document_type_and_dependents() {
    let applicant = ApplicantForm::default();
    assert_eq!(applicant.document_type, "CC");
    assert_eq!(applicant.dependents, 0);
    assert!(applicant.document_number.is_empty());
}

#[test]
fn applicant_draft_omits_unset_optionals() {
    let applicant = ApplicantForm {
        document_number: "1032456789".to_owned(),
        first_name: "Laura".to_owned(),
        first_last_name: "Pérez".to_owned(),
        ..ApplicantForm::default()
    };
    let value = serde_json::to_value(&applicant).expect("serialize");
    let object = value.as_object().expect("object");
    assert!(!object.contains_key("birth_date"));
    assert!(!object.contains_key("financial_info"));
    assert!(!object.contains_key("references"));
    assert_eq!(object["document_type"], "CC");
}

#[test]
fn application_status_round_trips_as_string() {
    let json = serde_json::to_string(&ApplicationStatus::Submitted).expect("serialize");
    assert_eq!(json, "\"Submitted\"");
    let status: ApplicationStatus = serde_json::from_str("\"Draft\"").expect("deserialize");
    assert_eq!(status, ApplicationStatus::Draft);
}

#[test]
fn credit_application_form_defaults_to_draft() {
    let form = CreditApplicationForm::default();
    assert_eq!(form.status, ApplicationStatus::Draft);
    assert_eq!(form.term_months, 12);
    assert!(form.co_debtors.is_empty());
}

#[test]
fn financial_info_round_trips_interview_fields() {
    let info = FinancialInfo {
        activity_type: Some("independiente".to_owned()),
        income: Some(Income { salary: Some(2_400_000.0), ..Income::default() }),
        assets: vec![AssetItem { description: Some("Vehículo".to_owned()), value: Some(38_000_000.0) }],
        ..FinancialInfo::default()
    };
    let value = serde_json::to_value(&info).expect("serialize");
    let back: FinancialInfo = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, info);
}
