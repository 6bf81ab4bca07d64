//! Product identifier generation

use uuid::Uuid;

/// Generator for globally unique product identifiers.
///
/// Produces version-4 UUIDs (128 random bits) rendered in canonical
/// hyphenated form. Infallible and stateless; uniqueness holds with
/// overwhelming probability across the lifetime of the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdService;

impl IdService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh identifier
    pub fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_canonical_uuid() {
        let id = IdService::new().generate_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids = IdService::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.generate_id()));
        }
    }
}
