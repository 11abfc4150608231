/// 표준 칠러 카탈로그와 전략별 필터를 제공한다.
/// 용량·효율·비용 값은 일반적인 수냉식 칠러 사양 기준의 참고값이다.

/// 카탈로그 한 줄: 단일 칠러 사양.
#[derive(Debug, Clone, Copy)]
pub struct ChillerSpec {
    /// 냉각 용량 [MW]
    pub size_mw: f64,
    /// 냉각 용량 [냉동톤]
    pub size_tons: f64,
    /// 성적계수
    pub cop: f64,
    /// 전력 효율 [kW/ton]
    pub kw_per_ton: f64,
    /// 설치비 [$/ton]
    pub install_cost_per_ton: f64,
    /// 대당 연간 유지보수비 [$]
    pub annual_maintenance_usd: f64,
}

impl ChillerSpec {
    pub const fn new(
        size_mw: f64,
        size_tons: f64,
        cop: f64,
        kw_per_ton: f64,
        install_cost_per_ton: f64,
        annual_maintenance_usd: f64,
    ) -> Self {
        Self {
            size_mw,
            size_tons,
            cop,
            kw_per_ton,
            install_cost_per_ton,
            annual_maintenance_usd,
        }
    }
}

const STANDARD_CATALOG: [ChillerSpec; 10] = [
    ChillerSpec::new(0.35, 100.0, 5.8, 0.61, 1200.0, 8000.0),
    ChillerSpec::new(0.53, 150.0, 6.2, 0.57, 1150.0, 10000.0),
    ChillerSpec::new(0.70, 200.0, 6.5, 0.54, 1100.0, 12000.0),
    ChillerSpec::new(1.05, 300.0, 6.8, 0.52, 1050.0, 15000.0),
    ChillerSpec::new(1.40, 400.0, 7.0, 0.50, 1000.0, 18000.0),
    ChillerSpec::new(1.75, 500.0, 7.2, 0.49, 980.0, 22000.0),
    ChillerSpec::new(2.63, 750.0, 7.5, 0.47, 950.0, 28000.0),
    ChillerSpec::new(3.50, 1000.0, 7.8, 0.45, 920.0, 35000.0),
    ChillerSpec::new(5.25, 1500.0, 8.0, 0.44, 900.0, 45000.0),
    ChillerSpec::new(7.00, 2000.0, 8.2, 0.43, 880.0, 55000.0),
];

/// 표준 카탈로그를 반환한다.
pub fn standard_catalog() -> &'static [ChillerSpec] {
    &STANDARD_CATALOG
}

/// 칠러 선정 전략. 후보 단위 용량 범위를 제한한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChillerStrategy {
    /// 소형 다수 (≤ 500 ton)
    Modular,
    /// 대형 소수 (≥ 750 ton)
    Central,
    /// 전체 카탈로그
    Balanced,
}

const MODULAR_MAX_TONS: f64 = 500.0;
const CENTRAL_MIN_TONS: f64 = 750.0;

/// 전략에 따라 후보 칠러 목록을 필터링한다.
pub fn filter_by_strategy(
    catalog: &[ChillerSpec],
    strategy: ChillerStrategy,
) -> Vec<&ChillerSpec> {
    catalog
        .iter()
        .filter(|spec| match strategy {
            ChillerStrategy::Modular => spec.size_tons <= MODULAR_MAX_TONS,
            ChillerStrategy::Central => spec.size_tons >= CENTRAL_MIN_TONS,
            ChillerStrategy::Balanced => true,
        })
        .collect()
}
