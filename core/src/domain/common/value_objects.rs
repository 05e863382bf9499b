use serde::{Deserialize, Deserializer};

pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Largest offset or limit Postgres accepts as a bigint.
pub const MAX_PAGE_VALUE: u64 = i64::MAX as u64;

/// Offset pagination shared by every list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            skip: skip.unwrap_or(0).min(MAX_PAGE_VALUE),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_VALUE),
        }
    }

    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .skip(self.skip as usize)
            .take(self.limit as usize)
            .cloned()
            .collect()
    }
}

/// A page of rows plus the total number of rows matching the scope, regardless of pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub count: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, count: u64) -> Self {
        Self { data, count }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            count: self.count,
        }
    }
}

/// Distinguishes an absent field from an explicit `null` in partial updates.
///
/// Use with `#[serde(default, deserialize_with = "deserialize_patch")]` on an
/// `Option<Option<T>>`: absent keeps `None`, `null` becomes `Some(None)`.
pub fn deserialize_patch<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Applies a partial update to a nullable field.
pub fn patch<T>(field: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Applies a partial update to a required field.
pub fn patch_required<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "deserialize_patch")]
        breed: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Payload = serde_json::from_str("{}").unwrap();
        let null: Payload = serde_json::from_str(r#"{"breed":null}"#).unwrap();
        let value: Payload = serde_json::from_str(r#"{"breed":"Shiba"}"#).unwrap();

        assert_eq!(absent.breed, None);
        assert_eq!(null.breed, Some(None));
        assert_eq!(value.breed, Some(Some("Shiba".to_string())));
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut breed = Some("Shiba".to_string());
        patch(&mut breed, None);
        assert_eq!(breed.as_deref(), Some("Shiba"));

        patch(&mut breed, Some(None));
        assert_eq!(breed, None);
    }

    #[test]
    fn pagination_defaults_and_slicing() {
        let pagination = Pagination::new(None, None);
        assert_eq!(pagination, Pagination { skip: 0, limit: 100 });

        let items: Vec<u32> = (0..10).collect();
        assert_eq!(Pagination::new(Some(8), Some(5)).apply(&items), vec![8, 9]);
    }

    #[test]
    fn pagination_is_clamped_to_bigint_range() {
        let pagination = Pagination::new(Some(u64::MAX), Some(u64::MAX));
        assert_eq!(pagination.skip, i64::MAX as u64);
        assert_eq!(pagination.limit, i64::MAX as u64);
        assert!(i64::try_from(pagination.limit).is_ok());
    }
}
