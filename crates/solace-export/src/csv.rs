//! RFC 4180 CSV writer for the user list.

use std::io::Write;

use solace_core::models::user::User;

use crate::error::ExportError;

pub const USER_COLUMNS: [&str; 6] = [
    "Name",
    "Email",
    "Age",
    "Assessment Name",
    "Join Date",
    "Status",
];

pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Quote a field if it contains a delimiter, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<W: Write>(out: &mut W, fields: &[String]) -> Result<(), ExportError> {
    let line: Vec<String> = fields.iter().map(|f| escape(f)).collect();
    out.write_all(line.join(",").as_bytes())?;
    out.write_all(b"\r\n")?;
    Ok(())
}

fn user_row(user: &User) -> Vec<String> {
    vec![
        user.display_name(),
        user.email.clone(),
        user.age.map(|a| a.to_string()).unwrap_or_default(),
        user.assessment_name.clone().unwrap_or_default(),
        user.join_date.map(|d| d.to_string()).unwrap_or_default(),
        user.status.label().to_string(),
    ]
}

/// Write the header row and one row per user, in order.
pub fn write_users<W: Write>(out: &mut W, users: &[User]) -> Result<(), ExportError> {
    let header: Vec<String> = USER_COLUMNS.iter().map(|c| c.to_string()).collect();
    write_row(out, &header)?;
    for user in users {
        write_row(out, &user_row(user))?;
    }
    tracing::debug!(rows = users.len(), "exported users");
    Ok(())
}

pub fn users_to_csv(users: &[User]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_users(&mut buf, users)?;
    Ok(buf)
}
