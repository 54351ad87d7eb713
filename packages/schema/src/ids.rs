use uuid::Uuid;

/// Generate a fresh entity ID
///
/// IDs are random v4 UUIDs rendered as lowercase hyphenated strings, so two
/// factory calls (or a duplicate of an existing entity) never collide.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
