use crate::model::search::SelectOptionDto;

/// Most options returned by a single search.
pub const MAX_SEARCH_RESULTS: usize = 25;

/// One selectable entry produced by a guild search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptionParam {
    pub id: u64,
    pub label: String,
}

impl SelectOptionParam {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    pub fn into_dto(self) -> SelectOptionDto {
        SelectOptionDto {
            value: self.id.to_string(),
            label: self.label,
        }
    }
}
