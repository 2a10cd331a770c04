use card_impose::*;

#[test]
fn test_default_spec_is_valid() {
    let spec = SheetSpec::default();
    assert!(spec.validate().is_ok());

    assert_eq!(spec.cards_per_sheet(), 9);
    assert!((spec.cell_width_mm() - 68.5).abs() < 1e-4);
    assert!((spec.cell_height_mm() - 93.0).abs() < 1e-4);
}

#[test]
fn test_validation_grid_must_fit_page() {
    // A 4x4 grid of poker cells needs 274mm of width; A4 has 210
    let spec = SheetSpec {
        grid_size: 4,
        ..SheetSpec::default()
    };

    let result = spec.validate();
    assert!(result.is_err());
    match result {
        Err(ImposeError::Config(msg)) => {
            assert!(msg.contains("does not fit"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_rejects_degenerate_specs() {
    let spec = SheetSpec {
        grid_size: 0,
        ..SheetSpec::default()
    };
    assert!(spec.validate().is_err());

    let spec = SheetSpec {
        card_width_mm: 0.0,
        ..SheetSpec::default()
    };
    assert!(spec.validate().is_err());

    let spec = SheetSpec {
        bleed_mm: -1.0,
        ..SheetSpec::default()
    };
    assert!(spec.validate().is_err());

    let spec = SheetSpec {
        dpi: 0.0,
        ..SheetSpec::default()
    };
    assert!(spec.validate().is_err());
}

#[test]
fn test_bleed_counts_against_page_fit() {
    // 3 x 70mm cards fit a 210mm page exactly with zero bleed, but not
    // with any bleed at all
    let spec = SheetSpec {
        card_width_mm: 70.0,
        card_height_mm: 90.0,
        bleed_mm: 0.0,
        ..SheetSpec::default()
    };
    assert!(spec.validate().is_ok());

    let spec = SheetSpec {
        bleed_mm: 1.0,
        ..spec
    };
    assert!(spec.validate().is_err());
}

#[test]
fn test_jpeg_quality_follows_optimize_flag() {
    let spec = SheetSpec::default();
    assert_eq!(spec.jpeg_quality(), 95);

    let spec = SheetSpec {
        optimize: false,
        ..spec
    };
    assert_eq!(spec.jpeg_quality(), 100);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_spec() {
    use tempfile::NamedTempFile;

    let spec = SheetSpec {
        grid_size: 2,
        dpi: 600.0,
        registration_marks: false,
        optimize: false,
        ..SheetSpec::default()
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    spec.save(path).await.unwrap();
    let loaded = SheetSpec::load(path).await.unwrap();

    assert_eq!(spec, loaded);
}
