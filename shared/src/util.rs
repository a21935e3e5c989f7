/// Generate a unique member ID.
///
/// UUID v4 string; assigned once at creation and never reused, even after
/// the record is deleted.
pub fn member_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
