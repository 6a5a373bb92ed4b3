use crate::domain::Opportunity;
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

/// Roster as an XLSX workbook: Name, Email, Phone, Signed Up.
pub fn roster_xlsx(op: &Opportunity) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .set_name("Roster")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name worksheet: {}", e)))?;

    let headers = ["Name", "Email", "Phone", "Signed Up"];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, v) in op.volunteers_signed_up.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, &v.name)
            .map_err(|e| ServerError::XlsxError(format!("name: {}", e)))?;
        worksheet
            .write_string(r, 1, &v.email)
            .map_err(|e| ServerError::XlsxError(format!("email: {}", e)))?;
        worksheet
            .write_string(r, 2, &v.phone)
            .map_err(|e| ServerError::XlsxError(format!("phone: {}", e)))?;
        worksheet
            .write_string(r, 3, v.signup_date.format("%Y-%m-%d %H:%M").to_string())
            .map_err(|e| ServerError::XlsxError(format!("signup date: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
