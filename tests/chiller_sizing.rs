//! 칠러 구성 탐색의 정렬/여유율/부하율 필터 회귀 테스트.
use datacenter_pipe_sizer::chiller::{
    filter_by_strategy, search_configurations, standard_catalog, ChillerSizingError,
    ChillerSizingInput, ChillerSpec, ChillerStrategy, RedundancyModel,
};

fn base_input(total_mw: f64) -> ChillerSizingInput {
    ChillerSizingInput {
        total_mw,
        redundancy_model: RedundancyModel::NPlus1,
        redundancy_percent: 20.0,
        strategy: ChillerStrategy::Balanced,
        max_chillers: 20,
        min_loading_percent: 40.0,
        max_loading_percent: 80.0,
        electricity_rate_per_kwh: 0.12,
        annual_hours: 8760.0,
    }
}

#[test]
fn sixty_mw_n_plus_one_returns_ranked_options() {
    let options = search_configurations(&base_input(60.0), standard_catalog()).expect("search");
    assert!(!options.is_empty(), "60 MW balanced should be feasible");
    for pair in options.windows(2) {
        assert!(
            pair[0].tco_per_mw <= pair[1].tco_per_mw,
            "not sorted: {} > {}",
            pair[0].tco_per_mw,
            pair[1].tco_per_mw
        );
    }
    for opt in &options {
        assert_eq!(opt.redundant_chillers, 1, "N+1 must keep exactly one spare");
        assert!(opt.loading_percent >= 40.0 && opt.loading_percent <= 80.0);
        assert_eq!(
            opt.total_chillers,
            opt.operating_chillers + opt.redundant_chillers
        );
        assert!(opt.total_chillers <= 20);
        assert!(opt.ten_year_tco > 0.0);
    }
}

#[test]
fn n_plus_two_keeps_two_spares() {
    let mut input = base_input(60.0);
    input.redundancy_model = RedundancyModel::NPlus2;
    let options = search_configurations(&input, standard_catalog()).expect("search");
    assert!(!options.is_empty());
    for opt in &options {
        assert_eq!(opt.redundant_chillers, 2);
    }
}

#[test]
fn n_plus_percent_covers_target_capacity() {
    let mut input = base_input(60.0);
    input.redundancy_model = RedundancyModel::NPlusPercent;
    input.redundancy_percent = 20.0;
    let options = search_configurations(&input, standard_catalog()).expect("search");
    assert!(!options.is_empty());
    for opt in &options {
        let spare_mw = opt.redundant_chillers as f64 * opt.size_mw;
        assert!(
            spare_mw >= 0.2 * 60.0 - 1e-9,
            "spare capacity {spare_mw} MW below 20% of 60 MW"
        );
    }
}

#[test]
fn strategy_filters_catalog_sizes() {
    let mut input = base_input(60.0);
    input.strategy = ChillerStrategy::Modular;
    let modular = search_configurations(&input, standard_catalog()).expect("modular");
    for opt in &modular {
        assert!(opt.size_tons <= 500.0, "modular got {} ton", opt.size_tons);
    }

    input.strategy = ChillerStrategy::Central;
    let central = search_configurations(&input, standard_catalog()).expect("central");
    for opt in &central {
        assert!(opt.size_tons >= 750.0, "central got {} ton", opt.size_tons);
    }

    assert_eq!(filter_by_strategy(standard_catalog(), ChillerStrategy::Balanced).len(), 10);
}

#[test]
fn one_mw_with_single_unit_cap_is_infeasible() {
    // 어떤 사이즈든 여유분 포함 2대 이상이 필요하므로 대수 상한 1로는 빈 목록이다
    let mut input = base_input(1.0);
    input.max_chillers = 1;
    let options = search_configurations(&input, standard_catalog()).expect("search");
    assert!(options.is_empty());
}

#[test]
fn small_plant_clamps_to_one_operating_plus_one_spare() {
    // N+% 0%에서 1대로 충분한 부하는 2대(1운전+1예비)로 클램프된다
    let mut input = base_input(5.0);
    input.redundancy_model = RedundancyModel::NPlusPercent;
    input.redundancy_percent = 0.0;
    input.strategy = ChillerStrategy::Central;
    let options = search_configurations(&input, standard_catalog()).expect("search");
    let seven_mw = options
        .iter()
        .find(|o| (o.size_mw - 7.0).abs() < 1e-9)
        .expect("7 MW unit should survive");
    assert_eq!(seven_mw.total_chillers, 2);
    assert_eq!(seven_mw.operating_chillers, 1);
    assert_eq!(seven_mw.redundant_chillers, 1);
    assert!((seven_mw.loading_percent - 5.0 / 7.0 * 100.0).abs() < 1e-9);
}

#[test]
fn loading_window_excludes_oversized_units() {
    // 1 MW 부하에서 7 MW 단일 운전기의 부하율은 14%라 창 밖이다
    let options = search_configurations(&base_input(1.0), standard_catalog()).expect("search");
    for opt in &options {
        assert!(opt.loading_percent >= 40.0 && opt.loading_percent <= 80.0);
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    let mut input = base_input(0.0);
    assert!(matches!(
        search_configurations(&input, standard_catalog()),
        Err(ChillerSizingError::InvalidInput(_))
    ));

    input = base_input(60.0);
    input.min_loading_percent = 90.0; // 상한보다 큰 하한
    assert!(matches!(
        search_configurations(&input, standard_catalog()),
        Err(ChillerSizingError::InvalidInput(_))
    ));

    input = base_input(60.0);
    input.electricity_rate_per_kwh = 0.0;
    assert!(matches!(
        search_configurations(&input, standard_catalog()),
        Err(ChillerSizingError::InvalidInput(_))
    ));
}

#[test]
fn synthetic_catalog_is_honored() {
    let catalog = [ChillerSpec::new(2.0, 568.7, 7.0, 0.5, 1000.0, 20000.0)];
    let options = search_configurations(&base_input(10.0), &catalog).expect("search");
    assert!(!options.is_empty());
    for opt in &options {
        assert!((opt.size_mw - 2.0).abs() < 1e-9);
    }
    // base = ceil(10 / (2 × 0.8)) = 7, +1 예비 = 8대, 부하율 = 10/(7×2) ≈ 71.4%
    assert_eq!(options[0].total_chillers, 8);
    assert_eq!(options[0].operating_chillers, 7);
    assert!((options[0].loading_percent - 10.0 / 14.0 * 100.0).abs() < 1e-9);
}

#[test]
fn cost_model_matches_hand_calculation() {
    // 단일 항목 카탈로그로 비용식을 수기 검산한다
    let catalog = [ChillerSpec::new(1.0, 284.0, 7.0, 0.5, 1000.0, 10000.0)];
    let mut input = base_input(2.0);
    input.electricity_rate_per_kwh = 0.10;
    input.annual_hours = 8000.0;
    let options = search_configurations(&input, &catalog).expect("search");
    let opt = &options[0];
    // base = ceil(2 / 0.8) = 3, 총 4대, 운전 3대, 부하율 = 2/3 × 100
    assert_eq!(opt.total_chillers, 4);
    assert_eq!(opt.operating_chillers, 3);
    let loading = 2.0 / 3.0 * 100.0;
    assert!((opt.loading_percent - loading).abs() < 1e-9);
    let operating_tons = 3.0 * 284.0 * (loading / 100.0);
    let annual_kwh = operating_tons * 0.5 * 8000.0;
    assert!((opt.annual_kwh - annual_kwh).abs() < 1e-6);
    let annual_energy_cost = annual_kwh * 0.10;
    let installation = 4.0 * 284.0 * 1000.0;
    let maintenance = 4.0 * 10000.0;
    let tco = installation + (annual_energy_cost + maintenance) * 10.0;
    assert!((opt.ten_year_tco - tco).abs() < 1e-6);
    assert!((opt.tco_per_mw - tco / 2.0).abs() < 1e-6);
}
