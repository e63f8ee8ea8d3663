use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a presentation-ready label for UI or logs.
///
/// Labels never expose a full account number; implementors use the masked
/// form.
pub trait Displayable {
    fn display_label(&self) -> String;
}
