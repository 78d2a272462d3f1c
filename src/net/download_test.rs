use super::*;

#[test]
fn endpoint_nests_application_and_document() {
    assert_eq!(
        download_endpoint("http://localhost:8000", 12, 34),
        "http://localhost:8000/api/credit-applications/12/documents/34/download"
    );
}

// =============================================================
// Content-Disposition parsing
// =============================================================

#[test]
fn unquoted_filename_token() {
    assert_eq!(
        filename_from_disposition("attachment; filename=cedula.pdf").as_deref(),
        Some("cedula.pdf")
    );
}

#[test]
fn quoted_filename_token() {
    assert_eq!(
        filename_from_disposition("attachment; filename=\"extracto enero.pdf\"").as_deref(),
        Some("extracto enero.pdf")
    );
    assert_eq!(
        filename_from_disposition("attachment; filename='carta.pdf'").as_deref(),
        Some("carta.pdf")
    );
}

#[test]
fn filename_token_stops_at_following_parameter() {
    assert_eq!(
        filename_from_disposition("attachment; filename=informe.pdf; size=882").as_deref(),
        Some("informe.pdf")
    );
}

#[test]
fn header_without_filename_yields_none() {
    assert_eq!(filename_from_disposition("inline"), None);
    assert_eq!(filename_from_disposition("attachment; filename="), None);
}

// =============================================================
// Filename precedence
// =============================================================

#[test]
fn explicit_name_wins() {
    assert_eq!(
        resolve_filename(Some("pagare.pdf"), Some("attachment; filename=otro.pdf")),
        "pagare.pdf"
    );
}

#[test]
fn disposition_used_when_no_explicit_name() {
    assert_eq!(
        resolve_filename(None, Some("attachment; filename=otro.pdf")),
        "otro.pdf"
    );
}

#[test]
fn fallback_when_nothing_names_the_file() {
    assert_eq!(resolve_filename(None, None), FALLBACK_FILENAME);
    assert_eq!(resolve_filename(Some(""), Some("inline")), FALLBACK_FILENAME);
}

#[test]
fn status_error_carries_the_http_status() {
    assert_eq!(DownloadError::Status(404).to_string(), "download failed with status 404");
}
