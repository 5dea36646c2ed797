//! Tests for the evaluation data model

#[cfg(test)]
mod tests {
    use crate::model::{
        ClassDistribution, ClassMetrics, ConfusionMatrix, DatasetRecord, ErrorBreakdown,
        ModelResult, PerClassMetrics,
    };

    fn sample_result() -> ModelResult {
        ModelResult {
            name: "DistilBERT-uncased".to_string(),
            accuracy: 0.9934,
            matches: 9924,
            mismatches: 66,
            classes: PerClassMetrics {
                mednarr: ClassMetrics {
                    precision: 0.93,
                    recall: 0.99,
                    f1: 0.96,
                    support: 779,
                },
                non_mednarr: ClassMetrics {
                    precision: 1.00,
                    recall: 0.99,
                    f1: 1.00,
                    support: 9211,
                },
            },
            confusion_matrix: ConfusionMatrix {
                tp: 773,
                fn_: 6,
                fp: 60,
                tn: 9151,
            },
            errors: ErrorBreakdown {
                mednarr_to_non_mednarr: 6,
                non_mednarr_to_mednarr: 60,
            },
        }
    }

    #[test]
    fn test_confusion_matrix_totals() {
        let cm = ConfusionMatrix {
            tp: 773,
            fn_: 6,
            fp: 60,
            tn: 9151,
        };
        assert_eq!(cm.total(), 9990);
        assert_eq!(cm.correct(), 9924);
        assert_eq!(cm.errors(), 66);
    }

    #[test]
    fn test_error_breakdown_consistency() {
        let cm = ConfusionMatrix {
            tp: 737,
            fn_: 42,
            fp: 28,
            tn: 9183,
        };
        let good = ErrorBreakdown {
            mednarr_to_non_mednarr: 42,
            non_mednarr_to_mednarr: 28,
        };
        let bad = ErrorBreakdown {
            mednarr_to_non_mednarr: 28,
            non_mednarr_to_mednarr: 42,
        };
        assert!(good.is_consistent_with(&cm));
        assert!(!bad.is_consistent_with(&cm));
    }

    #[test]
    fn test_model_result_validate() {
        let result = sample_result();
        assert!(result.validate(9990));
        assert!(!result.validate(9991));

        let mut broken = sample_result();
        broken.errors.non_mednarr_to_mednarr = 59;
        assert!(!broken.validate(9990));
    }

    #[test]
    fn test_dataset_record_model_lookup() {
        let record = DatasetRecord::new(
            "Dataset 1 (9,990 samples)",
            9990,
            ClassDistribution {
                mednarr: 779,
                non_mednarr: 9211,
            },
        )
        .with_model("distilbert", sample_result());

        assert!(record.has_model("distilbert"));
        assert!(!record.has_model("longformer"));
        assert!(record.model("longformer").is_none());
        assert_eq!(record.model_keys(), vec!["distilbert"]);
        assert_eq!(record.model_count(), 1);
        assert!(record.validate());
    }

    #[test]
    fn test_model_keys_preserve_insertion_order() {
        let record = DatasetRecord::new(
            "d",
            9990,
            ClassDistribution {
                mednarr: 779,
                non_mednarr: 9211,
            },
        )
        .with_model("longformer", sample_result())
        .with_model("distilbert", sample_result());

        assert_eq!(record.model_keys(), vec!["longformer", "distilbert"]);
    }

    #[test]
    fn test_class_distribution_total() {
        let dist = ClassDistribution {
            mednarr: 700,
            non_mednarr: 300,
        };
        assert_eq!(dist.total(), 1000);
    }

    #[test]
    fn test_confusion_matrix_serde_field_names() {
        let cm = ConfusionMatrix {
            tp: 696,
            fn_: 4,
            fp: 1,
            tn: 299,
        };
        let json = serde_json::to_string(&cm).unwrap();
        assert_eq!(json, r#"{"tp":696,"fn":4,"fp":1,"tn":299}"#);
        let back: ConfusionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cm);
    }
}
