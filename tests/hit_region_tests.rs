use approx::assert_abs_diff_eq;
use interact_rs::core::{
    AxisKind, HitRegionBuilder, LinearScale, Orientation, RegionMode, Surface,
};

const EPS: f64 = 1e-9;

fn x_scale(domain_start: f64, domain_end: f64, range_px: f64) -> LinearScale {
    LinearScale::new(domain_start, domain_end, range_px).expect("valid scale")
}

#[test]
fn multi_series_mode_builds_one_full_surface_region() {
    let regions = HitRegionBuilder::build(
        RegionMode::MultiSeries,
        Surface::new(1000, 500),
        Orientation::Standard,
        AxisKind::Continuous,
        &[2.0, 4.0, 8.0],
        &x_scale(0.0, 10.0, 1000.0),
        None,
    )
    .expect("build regions");

    assert_eq!(regions.len(), 1);
    let region = regions[0];
    assert_eq!(region.index, 0);
    assert_abs_diff_eq!(region.x, 0.0, epsilon = EPS);
    assert_abs_diff_eq!(region.y, 0.0, epsilon = EPS);
    assert_abs_diff_eq!(region.width, 1000.0, epsilon = EPS);
    assert_abs_diff_eq!(region.height, 500.0, epsilon = EPS);
}

#[test]
fn continuous_regions_split_at_neighbor_midpoints_and_reach_domain_edges() {
    let regions = HitRegionBuilder::build(
        RegionMode::SingleIndex,
        Surface::new(1000, 500),
        Orientation::Standard,
        AxisKind::Continuous,
        &[2.0, 4.0, 8.0],
        &x_scale(0.0, 10.0, 1000.0),
        None,
    )
    .expect("build regions");

    assert_eq!(regions.len(), 3);

    // Mapped positions are 200/400/800; midpoints at 300 and 600.
    assert_abs_diff_eq!(regions[0].x, 0.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[0].width, 300.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[1].x, 300.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[1].width, 300.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[2].x, 600.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[2].width, 400.0, epsilon = EPS);

    for region in &regions {
        assert_abs_diff_eq!(region.y, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(region.height, 500.0, epsilon = EPS);
    }
}

#[test]
fn single_data_point_spans_the_full_axis() {
    let regions = HitRegionBuilder::build(
        RegionMode::SingleIndex,
        Surface::new(1000, 500),
        Orientation::Standard,
        AxisKind::Continuous,
        &[5.0],
        &x_scale(0.0, 10.0, 1000.0),
        None,
    )
    .expect("build regions");

    assert_eq!(regions.len(), 1);
    assert_abs_diff_eq!(regions[0].x, 0.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[0].width, 1000.0, epsilon = EPS);
}

#[test]
fn categorical_regions_center_on_ticks_with_tick_spacing_width() {
    let regions = HitRegionBuilder::build(
        RegionMode::SingleIndex,
        Surface::new(400, 300),
        Orientation::Standard,
        AxisKind::Categorical,
        &[0.0, 1.0, 2.0, 3.0],
        &x_scale(0.0, 4.0, 400.0),
        None,
    )
    .expect("build regions");

    assert_eq!(regions.len(), 4);
    for (i, region) in regions.iter().enumerate() {
        assert_abs_diff_eq!(region.width, 100.0, epsilon = EPS);
        assert_abs_diff_eq!(region.x, i as f64 * 100.0 - 50.0, epsilon = EPS);
    }
}

#[test]
fn categorical_width_override_applies_and_invalid_values_fall_back() {
    let configured = HitRegionBuilder::build(
        RegionMode::SingleIndex,
        Surface::new(400, 300),
        Orientation::Standard,
        AxisKind::Categorical,
        &[0.0, 1.0, 2.0, 3.0],
        &x_scale(0.0, 4.0, 400.0),
        Some(30.0),
    )
    .expect("build regions");
    assert_abs_diff_eq!(configured[1].width, 30.0, epsilon = EPS);
    assert_abs_diff_eq!(configured[1].x, 100.0 - 15.0, epsilon = EPS);

    for invalid in [f64::NAN, 0.0, -5.0, f64::INFINITY] {
        let fallback = HitRegionBuilder::build(
            RegionMode::SingleIndex,
            Surface::new(400, 300),
            Orientation::Standard,
            AxisKind::Categorical,
            &[0.0, 1.0, 2.0, 3.0],
            &x_scale(0.0, 4.0, 400.0),
            Some(invalid),
        )
        .expect("build regions");
        assert_abs_diff_eq!(fallback[1].width, 100.0, epsilon = EPS);
    }
}

#[test]
fn rotated_orientation_partitions_along_y() {
    let regions = HitRegionBuilder::build(
        RegionMode::SingleIndex,
        Surface::new(300, 1000),
        Orientation::Rotated,
        AxisKind::Continuous,
        &[2.0, 4.0, 8.0],
        &x_scale(0.0, 10.0, 1000.0),
        None,
    )
    .expect("build regions");

    assert_abs_diff_eq!(regions[0].y, 0.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[0].height, 300.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[1].y, 300.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[2].y, 600.0, epsilon = EPS);
    assert_abs_diff_eq!(regions[2].height, 400.0, epsilon = EPS);

    for region in &regions {
        assert_abs_diff_eq!(region.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(region.width, 300.0, epsilon = EPS);
    }
}

#[test]
fn containment_is_half_open_so_neighbors_never_share_a_pixel() {
    let regions = HitRegionBuilder::build(
        RegionMode::SingleIndex,
        Surface::new(1000, 500),
        Orientation::Standard,
        AxisKind::Continuous,
        &[2.5, 5.0, 7.5],
        &x_scale(0.0, 10.0, 1000.0),
        None,
    )
    .expect("build regions");

    // 375 is the exact boundary between regions 0 and 1.
    let claimed: Vec<usize> = regions
        .iter()
        .filter(|region| region.contains(375.0, 100.0))
        .map(|region| region.index)
        .collect();
    assert_eq!(claimed, vec![1]);
}

#[test]
fn invalid_surface_is_rejected() {
    let result = HitRegionBuilder::build(
        RegionMode::SingleIndex,
        Surface::new(0, 500),
        Orientation::Standard,
        AxisKind::Continuous,
        &[1.0],
        &x_scale(0.0, 10.0, 1000.0),
        None,
    );
    assert!(result.is_err());
}
