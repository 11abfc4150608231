use std::cmp::Ordering;

use crate::chiller::catalog::{filter_by_strategy, ChillerSpec, ChillerStrategy};

/// 예비기 대수를 결정하는 여유율 모델.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedundancyModel {
    /// 예비 1대
    NPlus1,
    /// 예비 2대
    NPlus2,
    /// 총부하 대비 목표 % 이상의 예비 용량 (대수 올림)
    NPlusPercent,
}

/// 칠러 구성 탐색 입력값.
#[derive(Debug, Clone)]
pub struct ChillerSizingInput {
    /// 총 냉각부하 [MW]
    pub total_mw: f64,
    pub redundancy_model: RedundancyModel,
    /// N+% 모델의 목표 여유율 [%]
    pub redundancy_percent: f64,
    pub strategy: ChillerStrategy,
    /// 허용 최대 설치 대수
    pub max_chillers: u32,
    /// 운전 부하율 하한 [%]
    pub min_loading_percent: f64,
    /// 운전 부하율 상한 [%]
    pub max_loading_percent: f64,
    /// 전력 단가 [$/kWh]
    pub electricity_rate_per_kwh: f64,
    /// 연간 운전 시간 [h]
    pub annual_hours: f64,
}

/// 칠러 구성 탐색 오류를 표현한다.
#[derive(Debug, Clone)]
pub enum ChillerSizingError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for ChillerSizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChillerSizingError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for ChillerSizingError {}

/// 단일 칠러 사이즈에 대한 구성 후보. 생성 후 변경하지 않는다.
#[derive(Debug, Clone)]
pub struct ChillerOption {
    /// 단위 용량 [MW]
    pub size_mw: f64,
    /// 단위 용량 [냉동톤]
    pub size_tons: f64,
    pub total_chillers: u32,
    pub operating_chillers: u32,
    pub redundant_chillers: u32,
    /// 총 설치 용량 [MW]
    pub total_capacity_mw: f64,
    /// 총 설치 용량 [냉동톤]
    pub total_capacity_tons: f64,
    /// 운전기 부하율 [%]
    pub loading_percent: f64,
    /// 실제 여유율 [%] (예비 용량 / 총부하)
    pub redundancy_percent: f64,
    pub cop: f64,
    pub kw_per_ton: f64,
    /// 연간 전력 소비 [kWh]
    pub annual_kwh: f64,
    /// 연간 전력 비용 [$]
    pub annual_energy_cost: f64,
    /// 설치비 [$]
    pub installation_cost: f64,
    /// 연간 유지보수비 [$]
    pub annual_maintenance_cost: f64,
    /// 10년 총소유비용 [$]
    pub ten_year_tco: f64,
    /// MW 당 10년 TCO [$/MW] — 정렬 키
    pub tco_per_mw: f64,
}

/// 전략이 허용하는 모든 카탈로그 사이즈에 대해 여유율 모델을 적용한 구성을
/// 도출하고, 대수 상한과 부하율 범위를 통과한 후보를 MW 당 10년 TCO 오름차순으로
/// 정렬해 반환한다. 동률이면 총 대수가 적은 쪽을 앞세운다.
///
/// 조건을 만족하는 사이즈가 하나도 없으면 빈 목록을 반환한다. 이는 정상적인
/// "실현 가능한 구성 없음" 결과이며 오류가 아니다.
pub fn search_configurations(
    input: &ChillerSizingInput,
    catalog: &[ChillerSpec],
) -> Result<Vec<ChillerOption>, ChillerSizingError> {
    if input.total_mw <= 0.0 {
        return Err(ChillerSizingError::InvalidInput(
            "총 냉각부하는 0보다 커야 합니다.",
        ));
    }
    if input.electricity_rate_per_kwh <= 0.0 || input.annual_hours <= 0.0 {
        return Err(ChillerSizingError::InvalidInput(
            "전력 단가와 연간 운전 시간은 0보다 커야 합니다.",
        ));
    }
    if input.min_loading_percent <= 0.0
        || input.max_loading_percent <= 0.0
        || input.min_loading_percent >= input.max_loading_percent
    {
        return Err(ChillerSizingError::InvalidInput(
            "부하율 범위가 올바르지 않습니다.",
        ));
    }
    if input.redundancy_model == RedundancyModel::NPlusPercent && input.redundancy_percent < 0.0 {
        return Err(ChillerSizingError::InvalidInput(
            "목표 여유율은 음수일 수 없습니다.",
        ));
    }

    let mut results = Vec::new();

    for spec in filter_by_strategy(catalog, input.strategy) {
        // 상한 부하율에서도 부하를 감당하는 최소 운전 대수
        let base_chillers = (input.total_mw
            / (spec.size_mw * (input.max_loading_percent / 100.0)))
            .ceil() as u32;

        let (mut total_chillers, mut redundant_chillers) = match input.redundancy_model {
            RedundancyModel::NPlus1 => (base_chillers + 1, 1),
            RedundancyModel::NPlus2 => (base_chillers + 2, 2),
            RedundancyModel::NPlusPercent => {
                let redundant_capacity_mw = input.total_mw * (input.redundancy_percent / 100.0);
                let redundant = (redundant_capacity_mw / spec.size_mw).ceil() as u32;
                (base_chillers + redundant, redundant)
            }
        };

        if total_chillers > input.max_chillers {
            continue;
        }

        // 여유율을 갖추려면 최소 2대 — 1운전 + 1예비로 클램프
        if total_chillers < 2 {
            total_chillers = 2;
            redundant_chillers = 1;
        }

        let operating_chillers = total_chillers - redundant_chillers;
        let loading_percent =
            input.total_mw / (operating_chillers as f64 * spec.size_mw) * 100.0;
        if loading_percent > input.max_loading_percent
            || loading_percent < input.min_loading_percent
        {
            continue;
        }

        let redundancy_capacity_mw = redundant_chillers as f64 * spec.size_mw;
        let operating_tons =
            operating_chillers as f64 * spec.size_tons * (loading_percent / 100.0);
        let annual_kwh = operating_tons * spec.kw_per_ton * input.annual_hours;
        let annual_energy_cost = annual_kwh * input.electricity_rate_per_kwh;

        let total_capacity_tons = total_chillers as f64 * spec.size_tons;
        let installation_cost = total_capacity_tons * spec.install_cost_per_ton;
        let annual_maintenance_cost = total_chillers as f64 * spec.annual_maintenance_usd;
        let ten_year_tco = installation_cost + (annual_energy_cost + annual_maintenance_cost) * 10.0;

        results.push(ChillerOption {
            size_mw: spec.size_mw,
            size_tons: spec.size_tons,
            total_chillers,
            operating_chillers,
            redundant_chillers,
            total_capacity_mw: total_chillers as f64 * spec.size_mw,
            total_capacity_tons,
            loading_percent,
            redundancy_percent: redundancy_capacity_mw / input.total_mw * 100.0,
            cop: spec.cop,
            kw_per_ton: spec.kw_per_ton,
            annual_kwh,
            annual_energy_cost,
            installation_cost,
            annual_maintenance_cost,
            ten_year_tco,
            tco_per_mw: ten_year_tco / input.total_mw,
        });
    }

    results.sort_by(|a, b| {
        a.tco_per_mw
            .partial_cmp(&b.tco_per_mw)
            .unwrap_or(Ordering::Equal)
            .then(a.total_chillers.cmp(&b.total_chillers))
    });

    Ok(results)
}
