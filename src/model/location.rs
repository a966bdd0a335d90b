/// A named place/branch entity, managed by managers.
///
/// The list itself is owned by the parent context; the roster flow only
/// emits add/remove events against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
