// responses/download.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Return XLSX file as HTTP response
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    attachment(Body::from(buffer), XLSX_CONTENT_TYPE, filename)
}

/// Return CSV text as a downloadable file
pub fn csv_response(text: String, filename: &str) -> ResultResp {
    attachment(Body::from(text), mime::TEXT_CSV_UTF_8.as_ref(), filename)
}

fn attachment(body: Body, content_type: &str, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(body)
        .map_err(|_| ServerError::InternalError)
}
