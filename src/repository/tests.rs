//! Tests for the dataset repository and fixtures

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::model::{ClassDistribution, DatasetRecord};
    use crate::repository::{ocr_form_comparison, DatasetRepository};

    #[test]
    fn test_fixture_keys_in_insertion_order() {
        let repo = ocr_form_comparison();
        assert_eq!(repo.keys(), &["dataset1", "dataset2"]);
        assert_eq!(repo.len(), 2);
        assert!(!repo.is_empty());
    }

    #[test]
    fn test_get_unknown_key_is_not_found() {
        let repo = ocr_form_comparison();
        match repo.get("dataset3") {
            Err(Error::DatasetNotFound { key }) => assert_eq!(key, "dataset3"),
            other => panic!("expected DatasetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_fixture_records_are_internally_consistent() {
        let repo = ocr_form_comparison();
        for (key, record) in repo.iter() {
            assert!(record.validate(), "fixture {key} fails consistency checks");
        }
    }

    #[test]
    fn test_fixture_dataset1_values() {
        let repo = ocr_form_comparison();
        let record = repo.get("dataset1").unwrap();

        assert_eq!(record.total_samples, 9990);
        assert_eq!(record.class_distribution.mednarr, 779);
        assert_eq!(record.model_keys(), vec!["distilbert", "longformer"]);

        let distilbert = record.model("distilbert").unwrap();
        assert_eq!(distilbert.name, "DistilBERT-uncased");
        assert_eq!(distilbert.confusion_matrix.fp, 60);
        assert_eq!(distilbert.errors.non_mednarr_to_mednarr, 60);

        let longformer = record.model("longformer").unwrap();
        assert_eq!(longformer.matches, 9920);
        assert_eq!(longformer.errors.mednarr_to_non_mednarr, 42);
    }

    #[test]
    fn test_fixture_dataset2_values() {
        let repo = ocr_form_comparison();
        let record = repo.get("dataset2").unwrap();

        assert_eq!(record.total_samples, 1000);
        let longformer = record.model("longformer").unwrap();
        assert_eq!(longformer.confusion_matrix.fp, 0);
        assert_eq!(longformer.confusion_matrix.tn, 300);
        assert_eq!(longformer.mismatches, 38);
    }

    #[test]
    fn test_with_dataset_replaces_but_keeps_position() {
        let a = DatasetRecord::new(
            "a",
            10,
            ClassDistribution {
                mednarr: 4,
                non_mednarr: 6,
            },
        );
        let b = DatasetRecord::new(
            "b",
            20,
            ClassDistribution {
                mednarr: 5,
                non_mednarr: 15,
            },
        );
        let replacement = DatasetRecord::new(
            "a2",
            12,
            ClassDistribution {
                mednarr: 6,
                non_mednarr: 6,
            },
        );

        let repo = DatasetRepository::new()
            .with_dataset("first", a)
            .with_dataset("second", b)
            .with_dataset("first", replacement);

        assert_eq!(repo.keys(), &["first", "second"]);
        assert_eq!(repo.get("first").unwrap().name, "a2");
    }

    #[test]
    fn test_empty_repository() {
        let repo = DatasetRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
        assert!(repo.get("anything").is_err());
    }
}
