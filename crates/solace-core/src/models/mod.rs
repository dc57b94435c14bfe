pub mod assessment;
pub mod inquiry;
pub mod note;
pub mod resource;
pub mod user;

/// Today's date in the server's time zone. Pre-fills date fields left out
/// of a submitted form.
pub(crate) fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
