//! Baked-in evaluation fixtures for the OCR form-type comparison
//!
//! Two datasets, each with DistilBERT and Longformer results precomputed
//! offline. All numbers are fixed at construction and never recomputed.

use crate::model::{
    ClassDistribution, ClassMetrics, ConfusionMatrix, DatasetRecord, ErrorBreakdown, ModelResult,
    PerClassMetrics,
};
use crate::repository::DatasetRepository;

const DISTILBERT: &str = "DistilBERT-uncased";
const LONGFORMER: &str = "Longformer-DeBERTa (max length 1536)";

fn class_metrics(precision: f64, recall: f64, f1: f64, support: u64) -> ClassMetrics {
    ClassMetrics {
        precision,
        recall,
        f1,
        support,
    }
}

#[allow(clippy::too_many_arguments)]
fn model_result(
    name: &str,
    accuracy: f64,
    matches: u64,
    mismatches: u64,
    mednarr: ClassMetrics,
    non_mednarr: ClassMetrics,
    cm: ConfusionMatrix,
) -> ModelResult {
    ModelResult {
        name: name.to_string(),
        accuracy,
        matches,
        mismatches,
        classes: PerClassMetrics {
            mednarr,
            non_mednarr,
        },
        confusion_matrix: cm,
        errors: ErrorBreakdown {
            mednarr_to_non_mednarr: cm.fn_,
            non_mednarr_to_mednarr: cm.fp,
        },
    }
}

fn dataset1() -> DatasetRecord {
    DatasetRecord::new(
        "Dataset 1 (9,990 samples)",
        9990,
        ClassDistribution {
            mednarr: 779,
            non_mednarr: 9211,
        },
    )
    .with_model(
        "distilbert",
        model_result(
            DISTILBERT,
            0.9934,
            9924,
            66,
            class_metrics(0.93, 0.99, 0.96, 779),
            class_metrics(1.00, 0.99, 1.00, 9211),
            ConfusionMatrix {
                tp: 773,
                fn_: 6,
                fp: 60,
                tn: 9151,
            },
        ),
    )
    .with_model(
        "longformer",
        model_result(
            LONGFORMER,
            0.9930,
            9920,
            70,
            class_metrics(0.96, 0.95, 0.95, 779),
            class_metrics(1.00, 1.00, 1.00, 9211),
            ConfusionMatrix {
                tp: 737,
                fn_: 42,
                fp: 28,
                tn: 9183,
            },
        ),
    )
}

fn dataset2() -> DatasetRecord {
    DatasetRecord::new(
        "Dataset 2 (1,000 samples)",
        1000,
        ClassDistribution {
            mednarr: 700,
            non_mednarr: 300,
        },
    )
    .with_model(
        "distilbert",
        model_result(
            DISTILBERT,
            0.9950,
            995,
            5,
            class_metrics(1.00, 0.99, 1.00, 700),
            class_metrics(0.99, 1.00, 0.99, 300),
            ConfusionMatrix {
                tp: 696,
                fn_: 4,
                fp: 1,
                tn: 299,
            },
        ),
    )
    .with_model(
        "longformer",
        model_result(
            LONGFORMER,
            0.9620,
            962,
            38,
            class_metrics(1.00, 0.95, 0.97, 700),
            class_metrics(0.89, 1.00, 0.94, 300),
            ConfusionMatrix {
                tp: 662,
                fn_: 38,
                fp: 0,
                tn: 300,
            },
        ),
    )
}

/// Repository holding the two OCR form-type comparison datasets
pub fn ocr_form_comparison() -> DatasetRepository {
    DatasetRepository::new()
        .with_dataset("dataset1", dataset1())
        .with_dataset("dataset2", dataset2())
}
