//! Wire DTOs for the credit-application API.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's JSON payloads (snake_case
//! fields, `sucursal` naming for branch records) so serde round-trips stay
//! lossless and no field mapping happens outside this module.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the session endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Server-assigned user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// ISO 8601 timestamp of email verification, if verified.
    #[serde(default)]
    pub email_verified_at: Option<String>,
    /// Record creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Record update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Branch the user is affiliated with, if any.
    #[serde(default, rename = "sucursal_id")]
    pub branch_id: Option<i64>,
    /// Expanded branch record, when the server includes it.
    #[serde(default, rename = "sucursal")]
    pub branch: Option<Branch>,
    /// Role names granted to this user.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Permission names granted to this user (directly or via roles).
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A branch office (`sucursal` on the wire).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// A user row in admin listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified_at: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A named role with its permission grants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub guard_name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub permissions_count: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// A grantable permission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub name: String,
    pub guard_name: String,
}

/// Pagination envelope used by the listing endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Pagination cursor metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
}

/// The company operating this deployment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub nit: Option<String>,
    #[serde(default)]
    pub razon_social: Option<String>,
    #[serde(default)]
    pub legal_representative: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A credit application row in listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreditApplicationSummary {
    pub id: i64,
    /// Full name of the primary debtor.
    pub debtor_name: String,
    pub amount_requested: f64,
    pub term_months: i64,
    pub status: ApplicationStatus,
    pub created_at: String,
}

/// A stored document attached to an application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditDocument {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub filename: Option<String>,
    pub created_at: String,
}

/// Lifecycle state of a credit application draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Draft,
    Submitted,
}

/// Income breakdown from the debtor/co-debtor interview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Income {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crops: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Expense breakdown from the interview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Expenses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A declared asset line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Solvency summary computed during the interview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Solvency {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liabilities: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_estate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_ratio: Option<f64>,
}

/// Financial interview data (income, expenses, assets, solvency).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<Income>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses: Option<Expenses>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<AssetItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solvency: Option<Solvency>,
}

/// A personal reference named by an applicant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// Applicant draft (debtor or co-debtor) mirroring the server schema.
///
/// Optional fields are omitted from the serialized draft when unset so the
/// server applies its own defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicantForm {
    pub document_type: String,
    pub document_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expedition_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expedition_place: Option<String>,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    pub first_last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    pub dependents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence_address: Option<String>,
    /// Municipality id from the bundled catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence_city_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_residence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_info: Option<FinancialInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<ApplicantReference>,
}

impl Default for ApplicantForm {
    fn default() -> Self {
        Self {
            document_type: "CC".to_owned(),
            document_number: String::new(),
            expedition_date: None,
            expedition_place: None,
            first_name: String::new(),
            second_name: None,
            first_last_name: String::new(),
            second_last_name: None,
            birth_date: None,
            gender: None,
            marital_status: None,
            dependents: 0,
            mobile_phone: None,
            landline: None,
            email: None,
            residence_address: None,
            residence_city_id: None,
            residence_type: None,
            time_in_residence: None,
            occupation: None,
            company_name: None,
            position: None,
            contract_type: None,
            time_in_job: None,
            financial_info: None,
            references: Vec::new(),
        }
    }
}

/// Full credit-application draft as edited by the form pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreditApplicationForm {
    pub debtor: ApplicantForm,
    pub amount_requested: f64,
    pub term_months: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_description: Option<String>,
    pub agency_id: i64,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub co_debtors: Vec<ApplicantForm>,
}

impl Default for CreditApplicationForm {
    fn default() -> Self {
        Self {
            debtor: ApplicantForm::default(),
            amount_requested: 0.0,
            term_months: 12,
            destination: None,
            destination_description: None,
            agency_id: 0,
            status: ApplicationStatus::Draft,
            co_debtors: Vec::new(),
        }
    }
}
