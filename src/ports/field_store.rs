//! Field storage port.

/// Read/write access to generic transaction fields.
///
/// The adapter only needs lookups and in-place replacement, so any host-side
/// content container can be plugged in.
pub trait FieldStore {
    /// Value of a field, if present.
    fn field(&self, name: &str) -> Option<&str>;

    /// Insert or replace a field.
    fn set_field(&mut self, name: &str, value: String);

    /// Value of a field, treating an empty string as absent.
    fn non_empty_field(&self, name: &str) -> Option<&str> {
        self.field(name).filter(|value| !value.is_empty())
    }
}
