/// A named employee entity, managed by managers.
///
/// Like [`Location`](crate::model::Location), the list is parent-owned and
/// mutated only through roster events.
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: String,
    pub name: String,
}

impl Staff {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
