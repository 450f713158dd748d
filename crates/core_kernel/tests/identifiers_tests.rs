//! Unit tests for the Identifiers module

use core_kernel::{ProductId, RecommendationId, ReviewId};

mod product_id_tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(ProductId::from(42), id);
    }

    #[test]
    fn test_entity_name() {
        assert_eq!(ProductId::entity(), "Product");
        assert_eq!(RecommendationId::entity(), "Recommendation");
        assert_eq!(ReviewId::entity(), "Review");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ProductId>().is_err());
        assert!("1.5".parse::<ProductId>().is_err());
        assert_eq!("-3".parse::<ProductId>().unwrap(), ProductId::new(-3));
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(ProductId::new(1) < ProductId::new(2));
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_from_integer() {
        let id: ReviewId = serde_json::from_str("9").unwrap();
        assert_eq!(id, ReviewId::new(9));
    }

    #[test]
    fn test_deserialize_rejects_string() {
        assert!(serde_json::from_str::<ReviewId>("\"9\"").is_err());
    }
}
